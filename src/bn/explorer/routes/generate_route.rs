use log::{info, warn};
use rocket::response::{content::RawHtml as Html, status::BadRequest};

use crate::bn::common::errors::SamplerError;
use crate::bn::explorer::{render::{render_app_body, render_samples}, ExplorerState};
use crate::bn::inference::{ForwardSampler, SampleCount, SampleSet};

use super::index_route::DEFAULT_SAMPLES;

/// Draws a fresh sample set for one request. A missing count falls back to
/// the form default; an invalid count or seed is rejected before anything is
/// drawn.
pub fn draw_for_request(
    state: &ExplorerState,
    samples: Option<&str>,
    seed: Option<&str>,
) -> Result<SampleSet, SamplerError> {
    let count = match samples {
        Some(text) => text.parse::<SampleCount>()?,
        None => SampleCount::new(DEFAULT_SAMPLES),
    };
    let seed = seed
        .map(|text| {
            text.trim().parse::<u64>().map_err(|_| {
                SamplerError::invalid_argument(format!(
                    "seed must be a non-negative integer, got '{text}'"
                ))
            })
        })
        .transpose()?;
    let sampler = ForwardSampler::new(&state.model);
    let set = match seed {
        Some(seed) => sampler.sample_seeded(seed, count)?,
        None => sampler.sample_entropy(count)?,
    };
    info!("generated sample set {} with {} rows", set.id(), set.len());
    Ok(set)
}

pub fn internal_generate(
    state: &ExplorerState,
    samples: Option<&str>,
    seed: Option<&str>,
) -> Result<Html<String>, BadRequest<String>> {
    let set = draw_for_request(state, samples, seed).map_err(|e| {
        warn!("rejected generate request: {e}");
        BadRequest(e.to_string())
    })?;
    let body = render_samples(&state.model, &set).map_err(|e| BadRequest(e.to_string()))?;
    Ok(Html(render_app_body(&body)))
}
