use log::warn;
use rocket::{response::status::BadRequest, serde::json::Json};

use crate::bn::explorer::ExplorerState;
use crate::bn::inference::SampleSet;
use crate::bn::model::NetworkConfig;

use super::generate_route::draw_for_request;

pub fn internal_api_samples(
    state: &ExplorerState,
    samples: Option<&str>,
    seed: Option<&str>,
) -> Result<Json<SampleSet>, BadRequest<String>> {
    draw_for_request(state, samples, seed)
        .map(Json)
        .map_err(|e| {
            warn!("rejected sample request: {e}");
            BadRequest(e.to_string())
        })
}

pub fn internal_api_network(state: &ExplorerState) -> Json<NetworkConfig> {
    Json(state.model.config().clone())
}
