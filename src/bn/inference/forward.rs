use log::debug;
use ndarray::{Array2, ArrayView1};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::mem::size_of;

use crate::bn::common::errors::{Result, SamplerError};
use crate::bn::model::Model;

use super::{count::SampleCount, sample_set::SampleSet};

/// Ancestral sampler over a validated [`Model`].
///
/// Each sample walks the variables in topological order, selects the CPT
/// column from the parent values already drawn, and draws the variable's
/// outcome by inverse-CDF lookup on a single uniform `[0, 1)` value.
pub struct ForwardSampler<'a> {
    model: &'a Model,
}

impl<'a> ForwardSampler<'a> {
    pub fn new(model: &'a Model) -> Self {
        ForwardSampler { model }
    }

    /// Fails with [`SamplerError::InvalidArgument`] when the table for `count`
    /// samples cannot be addressed or allocated; nothing is drawn in that case.
    pub fn sample<R: Rng>(&self, rng: &mut R, count: SampleCount) -> Result<SampleSet> {
        let variables = self.model.variables();
        let n = count.get();
        let width = variables.len();
        debug!("drawing {} samples over {} variables", n, width);

        let cells = n
            .checked_mul(width)
            .filter(|cells| *cells <= isize::MAX as usize / size_of::<usize>())
            .ok_or_else(|| {
                SamplerError::invalid_argument(format!("{n} samples of {width} variables is too large"))
            })?;
        let mut flat: Vec<usize> = Vec::new();
        flat.try_reserve_exact(cells).map_err(|e| {
            SamplerError::invalid_argument(format!("cannot allocate {n} samples: {e}"))
        })?;

        let mut assignment = vec![0usize; width];
        for _ in 0..n {
            for &position in self.model.topological_order() {
                let column = self.model.column_index(position, &assignment);
                let u: f64 = rng.r#gen();
                assignment[position] = draw_index(variables[position].cpt.column(column), u);
            }
            flat.extend_from_slice(&assignment);
        }

        let rows = Array2::from_shape_vec((n, width), flat)
            .map_err(|e| SamplerError::invalid_argument(format!("sample table shape: {e}")))?;
        let columns = variables.iter().map(|v| v.name.clone()).collect();
        Ok(SampleSet::new(columns, rows))
    }

    /// Reproducible sampling from a `u64` seed.
    pub fn sample_seeded(&self, seed: u64, count: SampleCount) -> Result<SampleSet> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.sample(&mut rng, count)
    }

    /// Sampling from a generator freshly seeded by the operating system, so
    /// concurrent requests never share random state.
    pub fn sample_entropy(&self, count: SampleCount) -> Result<SampleSet> {
        let mut rng = StdRng::from_entropy();
        self.sample(&mut rng, count)
    }
}

/// Draws `n` samples from `model` with fresh entropy.
///
/// `n` may be any type convertible to [`SampleCount`]; negative or fractional
/// values fail with [`SamplerError::InvalidArgument`] and nothing is drawn.
pub fn sample<N>(model: &Model, n: N) -> Result<SampleSet>
where
    N: TryInto<SampleCount>,
    SamplerError: From<N::Error>,
{
    let count = n.try_into()?;
    ForwardSampler::new(model).sample_entropy(count)
}

/// Like [`sample`] with a caller supplied generator.
pub fn sample_with<N, R>(model: &Model, rng: &mut R, n: N) -> Result<SampleSet>
where
    N: TryInto<SampleCount>,
    SamplerError: From<N::Error>,
    R: Rng,
{
    let count = n.try_into()?;
    ForwardSampler::new(model).sample(rng, count)
}

/// First outcome whose cumulative probability strictly exceeds `u`.
///
/// If rounding leaves the column total at or below `u`, the last outcome with
/// non-zero probability is returned.
pub(crate) fn draw_index(distribution: ArrayView1<'_, f64>, u: f64) -> usize {
    let mut cumulative = 0.0;
    let mut last_supported = 0;
    for (outcome, p) in distribution.iter().enumerate() {
        if *p > 0.0 {
            last_supported = outcome;
        }
        cumulative += p;
        if cumulative > u {
            return outcome;
        }
    }
    last_supported
}
