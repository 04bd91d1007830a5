pub mod config;
pub mod network;
pub mod student;

use crate::bn::common::errors::Result;

pub use config::{NetworkConfig, VariableConfig};
pub use network::{Cpt, Model, Variable, PROBABILITY_TOLERANCE};
pub use student::student_network;

/// Builds the student performance model.
pub fn build() -> Result<Model> {
    Model::from_config(student_network())
}
