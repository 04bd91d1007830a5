use clap::{builder::EnumValueParser, Arg, ArgMatches, Command, ValueEnum};
use env_logger::{Builder, Env};
use log::info;
use serde::Deserialize;
use std::{io::Write, path::PathBuf};

use crate::bn::inference::SampleCount;
use crate::bn::model::{student_network, Model, NetworkConfig};

use super::errors::{Result, SamplerError};

/// How samples are written to stdout.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table with labelled outcomes
    #[serde(rename = "table")]
    Table,

    /// The whole sample set as a JSON document
    #[serde(rename = "json")]
    Json,

    /// Outcome indices, comma separated
    #[serde(rename = "csv")]
    Csv,
}

/// These options define the inputs from the user.
#[derive(Deserialize, Clone, Debug)]
pub struct CommandLineOptions {
    pub samples: SampleCount,
    pub seed: Option<u64>,
    pub network_file: Option<PathBuf>,
    pub format: OutputFormat,
    pub serve: bool,
    pub address: String,
    pub port: u16,
}

impl CommandLineOptions {
    /// The student network unless a network file was given.
    pub fn load_model(&self) -> Result<Model> {
        let config = match &self.network_file {
            Some(path) => {
                info!("loading network from {}", path.display());
                NetworkConfig::from_json_file(path)?
            }
            None => student_network(),
        };
        Model::from_config(config)
    }
}

/// `LEVEL [file:line] message`, default filter `info`, overridable by `RUST_LOG`.
pub fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            writeln!(
                buf,
                "{} [{}:{}] {}",
                record.level(),
                file,
                line,
                record.args()
            )
        })
        .init();
}

pub fn command() -> Command {
    Command::new("BAYESSAMPLER")
        .version("0.1")
        .about("Forward sampling from a discrete Bayesian network of student performance.")
        .arg(
            Arg::new("samples")
                .long("samples")
                .value_name("NUMBER")
                .help("Number of joint samples to draw")
                .default_value("500"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("NUMBER")
                .help("Seed for reproducible sampling (optional)"),
        )
        .arg(
            Arg::new("network")
                .long("network")
                .value_name("FILE")
                .help("JSON network definition to use instead of the student network"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(EnumValueParser::<OutputFormat>::new())
                .help("Output format: 'table', 'json' or 'csv'")
                .default_value("table"),
        )
        .arg(
            Arg::new("serve")
                .long("serve")
                .help("Start the web explorer instead of printing samples")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("address")
                .long("address")
                .value_name("ADDRESS")
                .help("Address the web explorer binds to")
                .default_value("127.0.0.1"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .value_name("PORT")
                .help("Port the web explorer listens on")
                .default_value("8000"),
        )
}

pub fn options_from_matches(matches: &ArgMatches) -> Result<CommandLineOptions> {
    let samples = matches
        .get_one::<String>("samples")
        .map(|s| s.parse::<SampleCount>())
        .transpose()?
        .unwrap_or(SampleCount::new(500));
    let seed = matches
        .get_one::<String>("seed")
        .map(|s| {
            s.parse::<u64>().map_err(|_| {
                SamplerError::invalid_argument(format!("seed must be a non-negative integer, got '{s}'"))
            })
        })
        .transpose()?;
    let network_file = matches.get_one::<String>("network").map(PathBuf::from);
    let format = matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or(OutputFormat::Table);
    let serve = matches.get_flag("serve");
    let address = matches
        .get_one::<String>("address")
        .cloned()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let port = match matches.get_one::<String>("port") {
        Some(p) => p.parse::<u16>().map_err(|_| {
            SamplerError::invalid_argument(format!("port must be between 0 and 65535, got '{p}'"))
        })?,
        None => 8000,
    };

    Ok(CommandLineOptions {
        samples,
        seed,
        network_file,
        format,
        serve,
        address,
        port,
    })
}

pub fn parse_configuration_options() -> Result<CommandLineOptions> {
    options_from_matches(&command().get_matches())
}
