pub mod errors;
pub mod setup;

pub use errors::{Result, SamplerError};
pub use setup::{CommandLineOptions, OutputFormat};
