pub mod bn;

pub use bn::{build, sample, ForwardSampler, Model, SampleCount, SampleSet, SamplerError};
