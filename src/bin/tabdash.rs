use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tabdash::select::{self, Selection};
use tabdash::viz::{ChartStyle, Theme};
use tabdash::{ingest, stats, storage, viz};

#[derive(Parser, Debug)]
#[command(
    name = "tabdash",
    version,
    about = "Load, filter, chart & summarize tabular data files"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the columns of a file with their classification.
    Columns(ColumnsArgs),
    /// Render a chart (and optionally export the filtered rows and print stats).
    Chart(ChartArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum StyleArg {
    Bar,
    Line,
    Area,
    Pie,
    Scatter,
}

impl From<StyleArg> for ChartStyle {
    fn from(s: StyleArg) -> Self {
        match s {
            StyleArg::Bar => ChartStyle::Bar,
            StyleArg::Line => ChartStyle::Line,
            StyleArg::Area => ChartStyle::Area,
            StyleArg::Pie => ChartStyle::Pie,
            StyleArg::Scatter => ChartStyle::Scatter,
        }
    }
}

#[derive(ValueEnum, Clone, Debug)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(t: ThemeArg) -> Self {
        match t {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Args, Debug)]
struct ColumnsArgs {
    /// Input file (.csv, .tsv, or .json).
    #[arg(short, long)]
    input: PathBuf,
}

#[derive(Args, Debug)]
struct ChartArgs {
    /// Input file (.csv, .tsv, or .json).
    #[arg(short, long)]
    input: PathBuf,
    /// Categorical column for the grouping axis.
    #[arg(short, long)]
    x: String,
    /// Numeric column for the value axis.
    #[arg(short, long)]
    y: String,
    /// Category values to keep, separated by comma or semicolon (default: all).
    #[arg(long)]
    keep: Option<String>,
    /// Chart style.
    #[arg(long, value_enum, default_value_t = StyleArg::Bar)]
    style: StyleArg,
    /// Color theme for the chart canvas.
    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    theme: ThemeArg,
    /// Chart output path (.svg or .png).
    #[arg(long, default_value = "chart.png")]
    out: PathBuf,
    /// Width of the chart (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the chart (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Print the summary block (max/min/average) to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
    /// Save the filtered rows to a file (format by extension: csv or json).
    #[arg(long)]
    export: Option<PathBuf>,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Columns(args) => cmd_columns(args),
        Command::Chart(args) => cmd_chart(args),
    }
}

fn cmd_columns(args: ColumnsArgs) -> Result<()> {
    let table = ingest::load_file(&args.input)?;
    println!("{} rows, {} columns", table.n_rows(), table.n_cols());
    for col in &table.columns {
        let kind = if col.data.is_numeric() {
            "numeric"
        } else {
            "categorical"
        };
        println!("{}  [{}]", col.name, kind);
    }
    if !table.has_chartable_axes() {
        eprintln!(
            "note: charting needs at least one categorical and one numeric column; this file cannot be charted"
        );
    }
    Ok(())
}

fn cmd_chart(args: ChartArgs) -> Result<()> {
    let table = ingest::load_file(&args.input)?;
    if !table.has_chartable_axes() {
        anyhow::bail!(
            "{} has no usable axis pair: charting needs at least one categorical and one numeric column",
            args.input.display()
        );
    }

    let keep = match &args.keep {
        Some(s) => parse_list(s),
        None => select::distinct_values(&table, &args.x)?,
    };
    let selection = Selection {
        categorical_axis: args.x.clone(),
        numeric_axis: args.y.clone(),
        keep,
        style: args.style.into(),
    };
    let view = select::filter_view(&table, &selection)?;

    // Export failure must not abort the summary output.
    match viz::render_chart(
        &view,
        selection.style,
        args.theme.into(),
        &args.out,
        args.width,
        args.height,
    ) {
        Ok(()) => eprintln!("Wrote chart to {}", args.out.display()),
        Err(e) => eprintln!("chart export failed: {:#}", e),
    }

    if let Some(path) = args.export.as_ref() {
        let fmt = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("csv")
            .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&view, path)?,
            "json" => storage::save_json(&view, path)?,
            other => anyhow::bail!("unsupported export format: {}", other),
        }
        eprintln!("Saved {} rows to {}", view.n_rows(), path.display());
    }

    if args.stats {
        if let Some(summary) = stats::summarize(&view) {
            for line in summary.lines(&args.y) {
                println!("{}", line);
            }
        }
        // An empty view has no statistics; print nothing.
    }

    Ok(())
}
