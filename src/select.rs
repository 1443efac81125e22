//! Selection state and row filtering.
//!
//! The widget values driving a render cycle are captured in an immutable
//! [`Selection`] and applied by pure functions; nothing here mutates the
//! table or caches across interactions.

use crate::models::{ColumnData, Table};
use crate::viz::ChartStyle;
use anyhow::{Result, bail};
use std::collections::HashSet;

/// One render cycle's choices: grouping axis, value axis, the category
/// values to keep, and the chart style. Rebuilt on every interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub categorical_axis: String,
    pub numeric_axis: String,
    /// Category values whose rows stay visible. An empty list yields an
    /// empty view; use [`distinct_values`] for the "everything" default.
    pub keep: Vec<String>,
    pub style: ChartStyle,
}

/// The table restricted to rows whose categorical-axis value is kept.
/// Borrows the table; row order is the original row order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    categorical_name: &'a str,
    numeric_name: &'a str,
    labels: &'a [String],
    values: &'a [f64],
    rows: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn categorical_name(&self) -> &'a str {
        self.categorical_name
    }

    pub fn numeric_name(&self) -> &'a str {
        self.numeric_name
    }

    /// Kept rows as `(category label, value)` pairs in original row order.
    pub fn rows(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        self.rows
            .iter()
            .map(|&i| (self.labels[i].as_str(), self.values[i]))
    }

    pub fn labels(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.rows.iter().map(|&i| self.labels[i].as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|&i| self.values[i])
    }

    /// Distinct kept category values in first-occurrence order.
    pub fn distinct_labels(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.labels().filter(|l| seen.insert(*l)).collect()
    }

    /// Narrow this view further to the given category values. Retaining by
    /// the same keep-set is idempotent: the view is unchanged.
    pub fn retain(&self, keep: &[String]) -> FilteredView<'a> {
        let keep: HashSet<&str> = keep.iter().map(String::as_str).collect();
        FilteredView {
            rows: self
                .rows
                .iter()
                .copied()
                .filter(|&i| keep.contains(self.labels[i].as_str()))
                .collect(),
            ..self.clone()
        }
    }
}

/// Distinct values of a categorical column in first-occurrence row order.
/// This is the default keep-set (every row visible).
pub fn distinct_values(table: &Table, column: &str) -> Result<Vec<String>> {
    let col = match table.column(column) {
        Some(c) => c,
        None => bail!("no column named {:?}", column),
    };
    let cells = match &col.data {
        ColumnData::Categorical(cells) => cells,
        ColumnData::Numeric(_) => bail!("column {:?} is numeric, not categorical", column),
    };
    let mut seen = HashSet::new();
    Ok(cells
        .iter()
        .filter(|v| seen.insert(v.as_str()))
        .cloned()
        .collect())
}

/// Apply a selection to the table, producing the filtered view.
///
/// Fails when an axis name is unknown or the column kinds do not match the
/// axis roles; these are user errors surfaced by the front-ends.
pub fn filter_view<'a>(table: &'a Table, selection: &Selection) -> Result<FilteredView<'a>> {
    let cat = match table.column(&selection.categorical_axis) {
        Some(c) => c,
        None => bail!("no column named {:?}", selection.categorical_axis),
    };
    let num = match table.column(&selection.numeric_axis) {
        Some(c) => c,
        None => bail!("no column named {:?}", selection.numeric_axis),
    };

    let labels = match &cat.data {
        ColumnData::Categorical(cells) => cells.as_slice(),
        ColumnData::Numeric(_) => bail!(
            "grouping axis {:?} is numeric; pick a categorical column",
            selection.categorical_axis
        ),
    };
    let values = match &num.data {
        ColumnData::Numeric(cells) => cells.as_slice(),
        ColumnData::Categorical(_) => bail!(
            "value axis {:?} is not numeric; pick a numeric column",
            selection.numeric_axis
        ),
    };

    let keep: HashSet<&str> = selection.keep.iter().map(String::as_str).collect();
    let rows = labels
        .iter()
        .enumerate()
        .filter(|(_, label)| keep.contains(label.as_str()))
        .map(|(i, _)| i)
        .collect();

    Ok(FilteredView {
        categorical_name: cat.name.as_str(),
        numeric_name: num.name.as_str(),
        labels,
        values,
        rows,
    })
}
