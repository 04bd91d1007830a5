use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::bn::common::errors::SamplerError;

/// How many joint samples to draw. Any non-negative integer is accepted; zero
/// yields an empty sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleCount(usize);

impl SampleCount {
    pub const fn new(count: usize) -> Self {
        SampleCount(count)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for SampleCount {
    fn from(count: usize) -> Self {
        SampleCount(count)
    }
}

impl TryFrom<i64> for SampleCount {
    type Error = SamplerError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        usize::try_from(count).map(SampleCount).map_err(|_| {
            SamplerError::invalid_argument(format!(
                "sample count must be a non-negative integer, got {count}"
            ))
        })
    }
}

impl TryFrom<f64> for SampleCount {
    type Error = SamplerError;

    fn try_from(count: f64) -> Result<Self, Self::Error> {
        if !count.is_finite() || count < 0.0 || count.fract() != 0.0 || count >= usize::MAX as f64 {
            return Err(SamplerError::invalid_argument(format!(
                "sample count must be a non-negative integer, got {count}"
            )));
        }
        Ok(SampleCount(count as usize))
    }
}

impl FromStr for SampleCount {
    type Err = SamplerError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if let Ok(count) = trimmed.parse::<i64>() {
            return SampleCount::try_from(count);
        }
        match trimmed.parse::<f64>() {
            Ok(count) => SampleCount::try_from(count),
            Err(_) => Err(SamplerError::invalid_argument(format!(
                "sample count must be a non-negative integer, got '{text}'"
            ))),
        }
    }
}

impl fmt::Display for SampleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
