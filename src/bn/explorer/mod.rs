pub mod render;
pub mod routes;

use log::info;
use rocket::{
    get,
    response::{content::RawHtml as Html, status::BadRequest},
    routes,
    serde::json::Json,
    Build, Config, Rocket, State,
};
use std::net::IpAddr;

use crate::bn::common::errors::{Result, SamplerError};
use crate::bn::inference::SampleSet;
use crate::bn::model::{Model, NetworkConfig};

use routes::{
    api_route::{internal_api_network, internal_api_samples},
    generate_route::internal_generate,
    index_route::internal_index,
};

/// Shared across requests. The model is immutable, so no locking is needed.
pub struct ExplorerState {
    pub model: Model,
}

#[get("/")]
fn index() -> Html<String> {
    internal_index()
}

#[get("/generate?<samples>&<seed>")]
fn generate(
    state: &State<ExplorerState>,
    samples: Option<&str>,
    seed: Option<&str>,
) -> std::result::Result<Html<String>, BadRequest<String>> {
    internal_generate(state, samples, seed)
}

#[get("/api/samples?<samples>&<seed>")]
fn api_samples(
    state: &State<ExplorerState>,
    samples: Option<&str>,
    seed: Option<&str>,
) -> std::result::Result<Json<SampleSet>, BadRequest<String>> {
    internal_api_samples(state, samples, seed)
}

#[get("/api/network")]
fn api_network(state: &State<ExplorerState>) -> Json<NetworkConfig> {
    internal_api_network(state)
}

/// The explorer application with default configuration.
pub fn build_rocket(model: Model) -> Rocket<Build> {
    mount(rocket::build(), model)
}

fn mount(app: Rocket<Build>, model: Model) -> Rocket<Build> {
    app.manage(ExplorerState { model })
        .mount("/", routes![index, generate, api_samples, api_network])
}

/// Runs the explorer until shutdown.
pub fn serve(model: Model, address: &str, port: u16) -> Result<()> {
    let address: IpAddr = address.parse().map_err(|_| {
        SamplerError::invalid_argument(format!("'{address}' is not an IP address"))
    })?;
    let config = Config {
        address,
        port,
        ..Config::default()
    };
    info!("starting explorer on http://{}:{}", address, port);
    rocket::execute(mount(rocket::custom(config), model).launch())
        .map_err(|e| SamplerError::Io {
            context: "running the web explorer".to_string(),
            source: std::io::Error::other(e.to_string()),
        })?;
    Ok(())
}
