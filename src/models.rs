use serde::{Deserialize, Serialize};

/// Cell data of a single column. The variant is decided once during ingestion:
/// a column is `Numeric` iff every cleaned cell parses as a number, otherwise
/// it stays `Categorical` holding the cleaned strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnData::Numeric(_))
    }
}

/// One named column of the table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// In-memory table derived from one uploaded file (one instance per file).
///
/// Invariants upheld by `ingest`: all columns have the same length and column
/// names are unique after trimming.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|c| c.data.len()).unwrap_or(0)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of all numeric columns, in table order.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.data.is_numeric())
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Names of all categorical columns, in table order.
    pub fn categorical_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| !c.data.is_numeric())
            .map(|c| c.name.as_str())
            .collect()
    }

    /// A chart needs at least one categorical and one numeric column.
    /// Front-ends use this to disable chart controls with a message instead
    /// of offering empty axis pickers.
    pub fn has_chartable_axes(&self) -> bool {
        !self.numeric_columns().is_empty() && !self.categorical_columns().is_empty()
    }
}
