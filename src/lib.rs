//! tabdash
//!
//! A lightweight Rust library for loading, filtering, charting, and summarizing
//! tabular data files. Pairs with the `tabdash` CLI and the `tabdash-gui`
//! desktop app.
//!
//! ### Features
//! - Load CSV/TSV/JSON tables with cell normalization (percent signs stripped,
//!   `,` decimal separators converted) and per-column numeric classification
//! - Filter rows by a chosen categorical column's values
//! - Render Bar/Line/Area/Pie/Scatter charts to SVG/PNG
//! - Quick summary statistics (max, min, mean, with the labels attaining max/min)
//! - Save the filtered rows as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use tabdash::select::{self, Selection};
//! use tabdash::viz::{ChartStyle, Theme};
//! use tabdash::{ingest, stats, viz};
//!
//! let table = ingest::load_file("sales.csv")?;
//! let keep = select::distinct_values(&table, "Region")?;
//! let selection = Selection {
//!     categorical_axis: "Region".into(),
//!     numeric_axis: "Revenue".into(),
//!     keep,
//!     style: ChartStyle::Bar,
//! };
//! let view = select::filter_view(&table, &selection)?;
//! viz::render_chart(&view, selection.style, Theme::Light, "chart.png", 1000, 600)?;
//! if let Some(summary) = stats::summarize(&view) {
//!     println!("{:#?}", summary);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod ingest;
pub mod models;
pub mod select;
pub mod stats;
pub mod storage;
pub mod viz;

pub use ingest::IngestError;
pub use models::{Column, ColumnData, Table};
pub use select::{FilteredView, Selection};
pub use viz::{ChartStyle, Theme};
