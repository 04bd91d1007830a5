use chrono::{DateTime, Utc};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis, s};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::bn::model::Model;

/// The result of one sampling request: one row per sample, one column per
/// variable, each cell an outcome index.
///
/// A sample set is created fresh for each request and owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    id: Uuid,
    generated_at: DateTime<Utc>,
    columns: Vec<String>,
    rows: Array2<usize>,
}

impl SampleSet {
    pub(crate) fn new(columns: Vec<String>, rows: Array2<usize>) -> Self {
        debug_assert_eq!(columns.len(), rows.ncols());
        SampleSet {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            columns,
            rows,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn len(&self) -> usize {
        self.rows.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> ArrayView2<'_, usize> {
        self.rows.view()
    }

    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, usize>> {
        self.column_position(name)
            .map(|position| self.rows.column(position))
    }

    pub fn row(&self, index: usize) -> Option<ArrayView1<'_, usize>> {
        (index < self.len()).then(|| self.rows.row(index))
    }

    /// Variable name to outcome index for one sample.
    pub fn record(&self, index: usize) -> Option<BTreeMap<&str, usize>> {
        let row = self.row(index)?;
        Some(
            self.columns
                .iter()
                .map(String::as_str)
                .zip(row.iter().copied())
                .collect(),
        )
    }

    /// Like [`SampleSet::record`] with the model's display labels applied.
    pub fn labeled_record(&self, index: usize, model: &Model) -> Option<BTreeMap<String, String>> {
        let row = self.row(index)?;
        Some(
            self.columns
                .iter()
                .zip(row.iter())
                .map(|(name, outcome)| {
                    let label = model
                        .variable(name)
                        .map(|v| v.label(*outcome))
                        .unwrap_or_else(|| outcome.to_string());
                    (name.clone(), label)
                })
                .collect(),
        )
    }

    /// The first `count` rows as a new view.
    pub fn head(&self, count: usize) -> ArrayView2<'_, usize> {
        let end = count.min(self.len());
        self.rows.slice(s![..end, ..])
    }

    /// Comma separated, header first.
    pub fn to_csv(&self) -> String {
        let mut out = self.columns.join(",");
        out.push('\n');
        for row in self.rows.axis_iter(Axis(0)) {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            out.push_str(&line.join(","));
            out.push('\n');
        }
        out
    }
}

#[derive(Serialize)]
struct SampleSetDocument<'a> {
    id: Uuid,
    generated_at: DateTime<Utc>,
    columns: &'a [String],
    rows: Vec<Vec<usize>>,
}

impl Serialize for SampleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SampleSetDocument {
            id: self.id,
            generated_at: self.generated_at,
            columns: &self.columns,
            rows: self.rows.axis_iter(Axis(0)).map(|r| r.to_vec()).collect(),
        }
        .serialize(serializer)
    }
}
