pub mod common;
pub mod explorer;
pub mod inference;
pub mod model;
pub mod summary;

/// Exports the main types for easy access
pub use common::errors::SamplerError;
pub use inference::{sample, ForwardSampler, SampleCount, SampleSet};
pub use model::{build, Model, NetworkConfig};
