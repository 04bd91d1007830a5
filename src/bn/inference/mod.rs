pub mod count;
pub mod forward;
pub mod sample_set;

pub use count::SampleCount;
pub use forward::{sample, sample_with, ForwardSampler};
pub use sample_set::SampleSet;
