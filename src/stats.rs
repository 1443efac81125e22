use crate::select::FilteredView;
use serde::{Deserialize, Serialize};

/// Descriptive statistics of the value axis over a filtered view.
///
/// Values carry full `f64` precision; [`fmt_value`] is the shared 2-decimal
/// display form. `max_label`/`min_label` are the categorical labels of the
/// rows attaining max/min; when several rows tie, the first in original row
/// order wins (committed, deterministic behavior).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    pub max_label: String,
    pub min_label: String,
}

impl Summary {
    /// The three labeled statistics of the summary block, ready to print.
    pub fn lines(&self, value_name: &str) -> Vec<String> {
        vec![
            format!(
                "Max {}: {} ({})",
                value_name,
                fmt_value(self.max),
                self.max_label
            ),
            format!(
                "Min {}: {} ({})",
                value_name,
                fmt_value(self.min),
                self.min_label
            ),
            format!("Average {}: {}", value_name, fmt_value(self.mean)),
        ]
    }
}

/// Compute the summary over a filtered view. Empty views have no summary.
pub fn summarize(view: &FilteredView) -> Option<Summary> {
    let mut rows = view.rows();
    let (first_label, first_value) = rows.next()?;

    let mut max = first_value;
    let mut min = first_value;
    let mut max_label = first_label;
    let mut min_label = first_label;
    let mut sum = first_value;
    let mut count = 1usize;

    // Strict comparisons keep the earliest attaining row's label on ties.
    for (label, value) in rows {
        if value > max {
            max = value;
            max_label = label;
        }
        if value < min {
            min = value;
            min_label = label;
        }
        sum += value;
        count += 1;
    }

    Some(Summary {
        count,
        max,
        min,
        mean: sum / count as f64,
        max_label: max_label.to_string(),
        min_label: min_label.to_string(),
    })
}

/// Totals of the value axis per distinct kept category, in first-occurrence
/// order. This is the pie-slice aggregation.
pub fn category_totals(view: &FilteredView) -> Vec<(String, f64)> {
    let mut out: Vec<(String, f64)> = Vec::new();
    for (label, value) in view.rows() {
        match out.iter_mut().find(|(l, _)| l == label) {
            Some((_, total)) => *total += value,
            None => out.push((label.to_string(), value)),
        }
    }
    out
}

/// Display form used by both front-ends: two decimal digits.
pub fn fmt_value(v: f64) -> String {
    format!("{:.2}", v)
}
