use log::{debug, info};
use ndarray::{Array2, ArrayView1};
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::{BTreeMap, HashMap, HashSet}};

use crate::bn::common::errors::{Result, SamplerError};

use super::config::{NetworkConfig, VariableConfig};

/// Each CPT column must sum to one within this tolerance.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// A conditional probability table.
///
/// Rows are the variable's own outcomes, columns the parent combinations with
/// the first-declared parent varying slowest.
#[derive(Debug, Clone, PartialEq)]
pub struct Cpt {
    values: Array2<f64>,
}

impl Cpt {
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn columns(&self) -> usize {
        self.values.ncols()
    }

    /// The distribution over outcomes for one parent combination.
    pub fn column(&self, index: usize) -> ArrayView1<'_, f64> {
        self.values.column(index)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub cardinality: usize,
    pub labels: Vec<String>,
    /// Indices into [`Model::variables`], in declared evidence order.
    pub parents: Vec<usize>,
    pub cpt: Cpt,
}

impl Variable {
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Display label for an outcome, falling back to the index itself.
    pub fn label(&self, outcome: usize) -> String {
        self.labels
            .get(outcome)
            .cloned()
            .unwrap_or_else(|| outcome.to_string())
    }
}

/// A validated, immutable discrete Bayesian network.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    name: String,
    variables: Vec<Variable>,
    order: Vec<usize>,
    config: NetworkConfig,
}

impl Model {
    /// Validates `config` and builds the model. Any violated invariant is a
    /// [`SamplerError::Configuration`].
    pub fn from_config(config: NetworkConfig) -> Result<Model> {
        debug!(
            "building network '{}' with {} variables",
            config.name,
            config.variables.len()
        );
        if config.variables.is_empty() {
            return Err(SamplerError::configuration("network has no variables"));
        }

        let mut index: HashMap<&str, usize> = HashMap::new();
        for (position, variable) in config.variables.iter().enumerate() {
            if index.insert(variable.name.as_str(), position).is_some() {
                return Err(SamplerError::configuration(format!(
                    "variable '{}' is declared more than once",
                    variable.name
                )));
            }
        }

        let mut parents_of: Vec<Vec<usize>> = Vec::with_capacity(config.variables.len());
        for variable in &config.variables {
            parents_of.push(resolve_parents(variable, &index)?);
        }

        let mut variables = Vec::with_capacity(config.variables.len());
        for (variable, parents) in config.variables.iter().zip(parents_of) {
            let parent_cards: Vec<usize> = parents
                .iter()
                .map(|p| config.variables[*p].cardinality)
                .collect();
            let cpt = build_cpt(variable, &parent_cards)?;
            variables.push(Variable {
                name: variable.name.clone(),
                cardinality: variable.cardinality,
                labels: variable.labels.clone(),
                parents,
                cpt,
            });
        }

        let order = topological_order(&variables)?;
        info!(
            "network '{}' validated: order [{}]",
            config.name,
            order
                .iter()
                .map(|i| variables[*i].name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Model {
            name: config.name.clone(),
            variables,
            order,
            config,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variables in declared order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|v| v.name == name)
    }

    /// Indices into [`Model::variables`]; every parent precedes its children.
    pub fn topological_order(&self) -> &[usize] {
        &self.order
    }

    pub fn topological_names(&self) -> Vec<&str> {
        self.order
            .iter()
            .map(|i| self.variables[*i].name.as_str())
            .collect()
    }

    /// Directed `(parent, child)` pairs.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut edges = Vec::new();
        for child in &self.variables {
            for parent in &child.parents {
                edges.push((self.variables[*parent].name.as_str(), child.name.as_str()));
            }
        }
        edges
    }

    pub fn cardinalities(&self) -> BTreeMap<&str, usize> {
        self.variables
            .iter()
            .map(|v| (v.name.as_str(), v.cardinality))
            .collect()
    }

    /// Variable name to outcome labels, for presentation only.
    pub fn labels(&self) -> BTreeMap<&str, &[String]> {
        self.variables
            .iter()
            .map(|v| (v.name.as_str(), v.labels.as_slice()))
            .collect()
    }

    /// The configuration this model was validated from.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Column of `variable`'s CPT selected by the parent values in `assignment`.
    /// `assignment` is indexed like [`Model::variables`].
    pub fn column_index(&self, variable: usize, assignment: &[usize]) -> usize {
        self.variables[variable]
            .parents
            .iter()
            .fold(0, |column, parent| {
                column * self.variables[*parent].cardinality + assignment[*parent]
            })
    }
}

fn resolve_parents(variable: &VariableConfig, index: &HashMap<&str, usize>) -> Result<Vec<usize>> {
    let mut seen = HashSet::new();
    let mut parents = Vec::with_capacity(variable.parents.len());
    for parent in &variable.parents {
        if parent == &variable.name {
            return Err(SamplerError::configuration(format!(
                "variable '{}' lists itself as a parent",
                variable.name
            )));
        }
        if !seen.insert(parent.as_str()) {
            return Err(SamplerError::configuration(format!(
                "variable '{}' lists parent '{}' twice",
                variable.name, parent
            )));
        }
        let position = index.get(parent.as_str()).ok_or_else(|| {
            SamplerError::configuration(format!(
                "variable '{}' depends on unknown variable '{}'",
                variable.name, parent
            ))
        })?;
        parents.push(*position);
    }
    Ok(parents)
}

fn build_cpt(variable: &VariableConfig, parent_cards: &[usize]) -> Result<Cpt> {
    let name = &variable.name;
    if variable.cardinality == 0 {
        return Err(SamplerError::configuration(format!(
            "variable '{name}' has cardinality 0"
        )));
    }
    if !variable.labels.is_empty() && variable.labels.len() != variable.cardinality {
        return Err(SamplerError::configuration(format!(
            "variable '{name}' has {} labels for {} outcomes",
            variable.labels.len(),
            variable.cardinality
        )));
    }
    if variable.values.len() != variable.cardinality {
        return Err(SamplerError::configuration(format!(
            "CPT of '{name}' has {} rows, expected {}",
            variable.values.len(),
            variable.cardinality
        )));
    }

    let columns: usize = parent_cards.iter().product();
    let mut flat = Vec::with_capacity(variable.cardinality * columns);
    for (row, values) in variable.values.iter().enumerate() {
        if values.len() != columns {
            return Err(SamplerError::configuration(format!(
                "CPT of '{name}' row {row} has {} columns, expected {columns}",
                values.len()
            )));
        }
        for p in values {
            if !p.is_finite() || *p < 0.0 {
                return Err(SamplerError::configuration(format!(
                    "CPT of '{name}' row {row} holds invalid probability {p}"
                )));
            }
        }
        flat.extend_from_slice(values);
    }

    let values = Array2::from_shape_vec((variable.cardinality, columns), flat)
        .map_err(|e| SamplerError::configuration(format!("CPT of '{name}': {e}")))?;
    for (column, distribution) in values.columns().into_iter().enumerate() {
        let total = distribution.sum();
        if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(SamplerError::configuration(format!(
                "CPT of '{name}' column {column} sums to {total}"
            )));
        }
    }
    Ok(Cpt { values })
}

/// Kahn's algorithm. Among ready variables the earliest declared is emitted
/// first, so the order is stable for a given configuration.
fn topological_order(variables: &[Variable]) -> Result<Vec<usize>> {
    let mut pending: Vec<usize> = variables.iter().map(|v| v.parents.len()).collect();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); variables.len()];
    for (child, variable) in variables.iter().enumerate() {
        for parent in &variable.parents {
            children[*parent].push(child);
        }
    }

    let mut ready = PriorityQueue::new();
    for (position, count) in pending.iter().enumerate() {
        if *count == 0 {
            ready.push(position, Reverse(position));
        }
    }

    let mut order = Vec::with_capacity(variables.len());
    while let Some((position, _)) = ready.pop() {
        order.push(position);
        for child in &children[position] {
            pending[*child] -= 1;
            if pending[*child] == 0 {
                ready.push(*child, Reverse(*child));
            }
        }
    }

    if order.len() != variables.len() {
        let cyclic: Vec<&str> = pending
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(i, _)| variables[i].name.as_str())
            .collect();
        return Err(SamplerError::configuration(format!(
            "dependency graph has a cycle through [{}]",
            cyclic.join(", ")
        )));
    }
    Ok(order)
}
