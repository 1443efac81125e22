//! File ingestion and normalization.
//!
//! Parses a tabular file into a [`Table`]: column names are trimmed, every
//! cell is cleaned (whitespace trimmed, literal `%` removed, `,` decimal
//! separators replaced by `.`), and each column is coerced to numeric when
//! every one of its cleaned cells parses as `f64`. Coercion is all-or-nothing
//! per column; a single unparseable cell keeps the whole column textual.
//!
//! Supported formats, dispatched by extension:
//! * `.csv` — comma-separated, header row required
//! * `.tsv` — tab-separated, header row required
//! * `.json` — array of flat objects, `[{"Region": "EU", "Revenue": 10}, ...]`

use crate::models::{Column, ColumnData, Table};
use log::{debug, info};
use serde_json::Value;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors produced while turning raw bytes into a [`Table`].
///
/// These are blocking: no partial table is ever produced.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file extension: .{0} (expected csv, tsv, or json)")]
    UnsupportedExtension(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tabular input: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed json input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a json array of objects")]
    JsonShape,
    #[error("input has no rows")]
    Empty,
    #[error("duplicate column name after trimming: {0:?}")]
    DuplicateColumn(String),
}

/// Load a table from a file, dispatching on the extension.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Table, IngestError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let open = || {
        std::fs::File::open(path).map_err(|source| IngestError::Io {
            path: path.display().to_string(),
            source,
        })
    };

    let table = match ext.as_str() {
        "csv" => read_csv(open()?, b',')?,
        "tsv" => read_csv(open()?, b'\t')?,
        "json" => {
            let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
                path: path.display().to_string(),
                source,
            })?;
            from_json(&serde_json::from_str(&text)?)?
        }
        other => return Err(IngestError::UnsupportedExtension(other.to_string())),
    };

    info!(
        "loaded {}: {} rows, {} columns ({} numeric)",
        path.display(),
        table.n_rows(),
        table.n_cols(),
        table.numeric_columns().len()
    );
    Ok(table)
}

/// Read a delimited table with a header row from any reader.
///
/// The `csv` crate enforces equal field counts per record, so ragged rows
/// surface as an [`IngestError::Csv`].
pub fn read_csv<R: Read>(reader: R, delimiter: u8) -> Result<Table, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    build_table(headers, rows)
}

/// Build a table from a JSON array of flat objects. Keys of the first object
/// define the columns; missing keys in later objects become empty cells.
pub fn from_json(value: &Value) -> Result<Table, IngestError> {
    let array = value.as_array().ok_or(IngestError::JsonShape)?;
    if array.is_empty() {
        return Err(IngestError::Empty);
    }

    let first = array[0].as_object().ok_or(IngestError::JsonShape)?;
    let headers: Vec<String> = first.keys().cloned().collect();

    let mut rows = Vec::with_capacity(array.len());
    for item in array {
        let obj = item.as_object().ok_or(IngestError::JsonShape)?;
        let row = headers
            .iter()
            .map(|h| match obj.get(h) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                Some(Value::Bool(b)) => b.to_string(),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            })
            .collect();
        rows.push(row);
    }

    build_table(headers, rows)
}

/// Assemble cleaned, classified columns from header names and string rows.
fn build_table(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Table, IngestError> {
    let headers: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();

    let mut seen = HashSet::new();
    for h in &headers {
        if !seen.insert(h.as_str()) {
            return Err(IngestError::DuplicateColumn(h.clone()));
        }
    }

    let mut columns = Vec::with_capacity(headers.len());
    for (idx, name) in headers.into_iter().enumerate() {
        let cells: Vec<String> = rows
            .iter()
            .map(|row| clean_cell(row.get(idx).map(String::as_str).unwrap_or("")))
            .collect();
        let data = coerce_column(cells);
        debug!(
            "column {:?}: {}",
            name,
            if data.is_numeric() { "numeric" } else { "categorical" }
        );
        columns.push(Column { name, data });
    }

    Ok(Table { columns })
}

/// Normalize one cell: trim, strip literal `%`, and turn `,` decimal
/// separators into `.`. Applied to every cell before coercion; categorical
/// columns keep the cleaned strings.
pub fn clean_cell(raw: &str) -> String {
    raw.trim().replace('%', "").replace(',', ".")
}

/// All-or-nothing numeric coercion: the column becomes `Numeric` iff every
/// cleaned cell parses as `f64`, otherwise the cleaned strings are kept.
fn coerce_column(cells: Vec<String>) -> ColumnData {
    let parsed: Option<Vec<f64>> = cells.iter().map(|c| c.parse::<f64>().ok()).collect();
    match parsed {
        Some(values) => ColumnData::Numeric(values),
        None => ColumnData::Categorical(cells),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_cell_strips_percent_and_locale_decimal() {
        assert_eq!(clean_cell(" 20,5% "), "20.5");
        assert_eq!(clean_cell("plain"), "plain");
        assert_eq!(clean_cell("a,b"), "a.b");
    }

    #[test]
    fn coercion_is_all_or_nothing() {
        let numeric = coerce_column(vec!["1".into(), "2.5".into()]);
        assert_eq!(numeric, ColumnData::Numeric(vec![1.0, 2.5]));

        let textual = coerce_column(vec!["1".into(), "west".into()]);
        assert_eq!(
            textual,
            ColumnData::Categorical(vec!["1".into(), "west".into()])
        );
    }

    #[test]
    fn duplicate_trimmed_headers_rejected() {
        let err = build_table(vec!["A ".into(), " A".into()], vec![]).unwrap_err();
        assert!(matches!(err, IngestError::DuplicateColumn(name) if name == "A"));
    }
}
