use crate::select::FilteredView;
use anyhow::Result;
use csv::WriterBuilder;
use serde_json::json;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save the filtered rows as CSV with a header row (category, value).
pub fn save_csv<P: AsRef<Path>>(view: &FilteredView, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record([view.categorical_name(), view.numeric_name()])?;
    for (label, value) in view.rows() {
        wtr.serialize((label, value))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save the filtered rows as a pretty JSON array of objects keyed by the
/// axis column names.
pub fn save_json<P: AsRef<Path>>(view: &FilteredView, path: P) -> Result<()> {
    let cat = view.categorical_name();
    let num = view.numeric_name();
    let rows: Vec<serde_json::Value> = view
        .rows()
        .map(|(label, value)| json!({ cat: label, num: value }))
        .collect();
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(&rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest;
    use crate::select::{self, Selection};
    use crate::viz::ChartStyle;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let table = ingest::read_csv(
            "Region,Revenue\nEU,10\nUS,20\n".as_bytes(),
            b',',
        )
        .unwrap();
        let selection = Selection {
            categorical_axis: "Region".into(),
            numeric_axis: "Revenue".into(),
            keep: select::distinct_values(&table, "Region").unwrap(),
            style: ChartStyle::Bar,
        };
        let view = select::filter_view(&table, &selection).unwrap();

        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        save_csv(&view, &csvp).unwrap();
        save_json(&view, &jsonp).unwrap();

        let csv_text = std::fs::read_to_string(&csvp).unwrap();
        assert!(csv_text.starts_with("Region,Revenue"));
        let json_text = std::fs::read_to_string(&jsonp).unwrap();
        assert!(json_text.contains("\"Region\": \"US\""));
    }
}
