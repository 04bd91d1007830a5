use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::bn::common::errors::{Result, SamplerError};

/// Declarative description of one discrete variable and its CPT.
///
/// `values` is laid out the way the table is authored: one row per outcome of
/// this variable, one column per combination of parent outcomes. Columns are
/// enumerated with the first-declared parent varying slowest, so for parents
/// `[a, b]` with cardinalities `[2, 2]` the columns are
/// `(a=0,b=0), (a=0,b=1), (a=1,b=0), (a=1,b=1)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableConfig {
    pub name: String,
    pub cardinality: usize,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub parents: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl VariableConfig {
    /// A root variable with a marginal distribution.
    pub fn root(name: &str, labels: &[&str], marginal: &[f64]) -> Self {
        VariableConfig {
            name: name.to_string(),
            cardinality: marginal.len(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            parents: vec![],
            values: marginal.iter().map(|p| vec![*p]).collect(),
        }
    }

    /// A child variable. `values` rows are outcomes, columns parent combinations.
    pub fn conditional(
        name: &str,
        labels: &[&str],
        parents: &[&str],
        values: Vec<Vec<f64>>,
    ) -> Self {
        VariableConfig {
            name: name.to_string(),
            cardinality: values.len(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            parents: parents.iter().map(|p| p.to_string()).collect(),
            values,
        }
    }
}

/// A whole network as plain data. Nothing here is validated; see
/// [`Model::from_config`](super::network::Model::from_config).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    pub variables: Vec<VariableConfig>,
}

impl NetworkConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SamplerError::Io {
            context: format!("reading network file {}", path.display()),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
