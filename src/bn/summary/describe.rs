use ndarray::Array2;
use serde::Serialize;

use crate::bn::common::errors::{Result, SamplerError};
use crate::bn::inference::SampleSet;
use crate::bn::model::{Model, Variable};

/// Summary statistics of one column, in the shape of a dataframe `describe`.
/// Undefined values (empty column, spread of a single value) are NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

/// Statistics of one column restricted to rows where another variable takes
/// a given outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub outcome: usize,
    pub label: String,
    pub stats: ColumnStats,
}

pub fn describe_values(name: &str, values: &[usize]) -> ColumnStats {
    let mut sorted: Vec<f64> = values.iter().map(|v| *v as f64).collect();
    sorted.sort_by(f64::total_cmp);
    let count = sorted.len();
    let mean = if count == 0 {
        f64::NAN
    } else {
        sorted.iter().sum::<f64>() / count as f64
    };
    let std = if count < 2 {
        f64::NAN
    } else {
        let squares: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
        (squares / (count - 1) as f64).sqrt()
    };
    ColumnStats {
        name: name.to_string(),
        count,
        mean,
        std,
        min: sorted.first().copied().unwrap_or(f64::NAN),
        q25: quantile(&sorted, 0.25),
        q50: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted.last().copied().unwrap_or(f64::NAN),
    }
}

/// Linear interpolation between closest ranks. `sorted` must be ascending.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (position - lower as f64)
}

/// One [`ColumnStats`] per column, in column order.
pub fn describe(set: &SampleSet) -> Vec<ColumnStats> {
    set.columns()
        .iter()
        .enumerate()
        .map(|(position, name)| {
            let values: Vec<usize> = set.rows().column(position).to_vec();
            describe_values(name, &values)
        })
        .collect()
}

/// Number of samples per outcome of `variable`, indexed by outcome.
pub fn value_counts(set: &SampleSet, model: &Model, variable: &str) -> Result<Vec<usize>> {
    let (spec, column) = lookup(set, model, variable)?;
    let mut counts = vec![0usize; spec.cardinality];
    for outcome in set.rows().column(column) {
        let slot = counts
            .get_mut(*outcome)
            .ok_or_else(|| out_of_range(spec, *outcome))?;
        *slot += 1;
    }
    Ok(counts)
}

/// Distribution of `of` within each outcome group of `by`; the data behind a
/// box plot of `of` against `by`.
pub fn grouped_describe(
    set: &SampleSet,
    model: &Model,
    by: &str,
    of: &str,
) -> Result<Vec<GroupStats>> {
    let (by_spec, by_column) = lookup(set, model, by)?;
    let (_, of_column) = lookup(set, model, of)?;
    let rows = set.rows();
    let groups = (0..by_spec.cardinality)
        .map(|outcome| {
            let values: Vec<usize> = rows
                .outer_iter()
                .filter(|row| row[by_column] == outcome)
                .map(|row| row[of_column])
                .collect();
            GroupStats {
                outcome,
                label: by_spec.label(outcome),
                stats: describe_values(of, &values),
            }
        })
        .collect();
    Ok(groups)
}

/// Empirical `P(child | parent)`: one row per parent outcome, one column per
/// child outcome. Rows with no supporting samples are all zero.
pub fn conditional_frequencies(
    set: &SampleSet,
    model: &Model,
    child: &str,
    parent: &str,
) -> Result<Array2<f64>> {
    let (child_spec, child_column) = lookup(set, model, child)?;
    let (parent_spec, parent_column) = lookup(set, model, parent)?;
    let mut table = Array2::<f64>::zeros((parent_spec.cardinality, child_spec.cardinality));
    for row in set.rows().outer_iter() {
        let (parent_outcome, child_outcome) = (row[parent_column], row[child_column]);
        if parent_outcome >= parent_spec.cardinality {
            return Err(out_of_range(parent_spec, parent_outcome));
        }
        if child_outcome >= child_spec.cardinality {
            return Err(out_of_range(child_spec, child_outcome));
        }
        table[[parent_outcome, child_outcome]] += 1.0;
    }
    for mut counts in table.rows_mut() {
        let total = counts.sum();
        if total > 0.0 {
            counts /= total;
        }
    }
    Ok(table)
}

fn lookup<'m>(set: &SampleSet, model: &'m Model, name: &str) -> Result<(&'m Variable, usize)> {
    let variable = model
        .variable(name)
        .ok_or_else(|| SamplerError::invalid_argument(format!("unknown variable '{name}'")))?;
    let column = set.column_position(name).ok_or_else(|| {
        SamplerError::invalid_argument(format!("sample set has no column '{name}'"))
    })?;
    Ok((variable, column))
}

/// The sample set was not drawn from this model.
fn out_of_range(variable: &Variable, outcome: usize) -> SamplerError {
    SamplerError::invalid_argument(format!(
        "outcome {outcome} of '{}' exceeds its cardinality {}",
        variable.name, variable.cardinality
    ))
}
