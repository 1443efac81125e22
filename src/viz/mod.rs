//! Visualization: render a filtered view to **SVG** or **PNG**.
//!
//! - One rendering function per chart style, dispatched from [`render_chart`]
//! - Chart styles: `Bar`, `Line`, `Area`, `Pie`, `Scatter`
//! - Light/Dark theme presets for canvas, text, and series colors
//! - An empty view renders a placeholder canvas instead of failing

pub mod types;
pub mod util;

pub use types::{ChartStyle, Theme};

use crate::select::FilteredView;
use crate::stats::category_totals;
use anyhow::{Result, anyhow};
use log::debug;
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use util::{OFFICE10, office_color, truncate_to_width, value_range};

/// Render the view with the given style. The backend is chosen by the output
/// extension (`.svg` → SVG, anything else → bitmap/PNG).
///
/// An empty view is not an error: a placeholder canvas is written so the
/// caller can still show *something* for an all-excluded filter.
pub fn render_chart<P: AsRef<Path>>(
    view: &FilteredView,
    style: ChartStyle,
    theme: Theme,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    debug!(
        "rendering {} chart ({} rows) to {}",
        style.label(),
        view.n_rows(),
        path_string
    );

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, view, style, theme)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, view, style, theme)?;
    }
    Ok(())
}

fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    view: &FilteredView,
    style: ChartStyle,
    theme: Theme,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&theme.background())
        .map_err(|e| anyhow!("{:?}", e))?;

    if view.is_empty() {
        draw_placeholder(&root, theme, "No data for the current filter")?;
        root.present().map_err(|e| anyhow!("{:?}", e))?;
        return Ok(());
    }

    match style {
        ChartStyle::Pie => draw_pie(&root, view, theme)?,
        _ => draw_cartesian(&root, view, style, theme)?,
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_placeholder<DB>(root: &DrawingArea<DB, Shift>, theme: Theme, note: &str) -> Result<()>
where
    DB: DrawingBackend,
{
    let (w, h) = root.dim_in_pixel();
    let style = (FontFamily::SansSerif, 20)
        .into_font()
        .color(&theme.text())
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(
        note.to_string(),
        (w as i32 / 2, h as i32 / 2),
        style,
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Bar, Line, Area, and Scatter share one cartesian frame: x is the row
/// position with category labels as tick text, y is the value axis.
fn draw_cartesian<DB>(
    root: &DrawingArea<DB, Shift>,
    view: &FilteredView,
    style: ChartStyle,
    theme: Theme,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let labels: Vec<String> = view.labels().map(|l| l.to_string()).collect();
    let values: Vec<f64> = view.values().collect();
    let n = values.len();

    // Bars and areas grow from the zero baseline; lines and markers float.
    let include_zero = matches!(style, ChartStyle::Bar | ChartStyle::Area);
    let (y_min, y_max) = value_range(&values, include_zero);
    let x_range = -0.5f64..(n as f64 - 0.5);

    let text = theme.text();
    let title = format!("{} by {}", view.numeric_name(), view.categorical_name());

    // Category labels only at whole row positions; fractional ticks stay blank.
    let tick_labels = labels.clone();
    let x_label_fmt = move |x: &f64| {
        let rounded = x.round();
        if (x - rounded).abs() > 0.25 || rounded < 0.0 {
            return String::new();
        }
        tick_labels
            .get(rounded as usize)
            .map(|l| truncate_to_width(l, 12, 90))
            .unwrap_or_default()
    };
    let y_label_fmt = |v: &f64| {
        let a = v.abs();
        let prec = if a >= 100.0 {
            0
        } else if a >= 10.0 {
            1
        } else {
            2
        };
        format!("{:.*}", prec, *v)
    };

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .caption(title, (FontFamily::SansSerif, 24).into_font().color(&text))
        .set_label_area_size(LabelAreaPosition::Left, 64)
        .set_label_area_size(LabelAreaPosition::Bottom, 48)
        .build_cartesian_2d(x_range, y_min..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .configure_mesh()
        .x_desc(view.categorical_name())
        .y_desc(view.numeric_name())
        .x_labels(n.min(12))
        .y_labels(10)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, 12).into_font().color(&text))
        .axis_desc_style((FontFamily::SansSerif, 16).into_font().color(&text))
        .axis_style(text)
        .bold_line_style(text.mix(0.2))
        .light_line_style(text.mix(0.08))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let accent = theme.accent();
    let series: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();

    match style {
        ChartStyle::Bar => {
            let baseline = 0.0f64;
            chart
                .draw_series(series.iter().map(|&(x, y)| {
                    Rectangle::new(
                        [(x - 0.4, baseline.min(y)), (x + 0.4, baseline.max(y))],
                        accent.filled(),
                    )
                }))
                .map_err(|e| anyhow!("{:?}", e))?;
            // Value labels above the bars, like the original dashboard's bars.
            let label_style = (FontFamily::SansSerif, 12)
                .into_font()
                .color(&text)
                .pos(Pos::new(HPos::Center, VPos::Bottom));
            chart
                .draw_series(series.iter().map(|&(x, y)| {
                    EmptyElement::at((x, baseline.max(y)))
                        + Text::new(format!("{:.2}", y), (0, -4), label_style.clone())
                }))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
        ChartStyle::Line => {
            let style = ShapeStyle {
                color: accent.to_rgba(),
                filled: false,
                stroke_width: 2,
            };
            chart
                .draw_series(LineSeries::new(series, style))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
        ChartStyle::Area => {
            let fill = accent.mix(0.20).filled();
            let border = accent.stroke_width(1);
            chart
                .draw_series(AreaSeries::new(series, 0.0, fill).border_style(border))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
        ChartStyle::Scatter => {
            // One series per category so colors and the legend match the
            // original's category-colored markers.
            for (idx, cat) in view.distinct_labels().iter().enumerate() {
                let color = office_color(idx);
                let points: Vec<(f64, f64)> = labels
                    .iter()
                    .zip(series.iter())
                    .filter(|(l, _)| l.as_str() == *cat)
                    .map(|(_, &p)| p)
                    .collect();
                let legend_color = color;
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
                    )
                    .map_err(|e| anyhow!("{:?}", e))?
                    .label(cat.to_string())
                    .legend(move |(x, y)| Circle::new((x + 8, y), 4, legend_color.filled()));
            }
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .border_style(text.mix(0.6))
                .background_style(theme.background().mix(0.85))
                .label_font((FontFamily::SansSerif, 14).into_font().color(&text))
                .draw()
                .map_err(|e| anyhow!("{:?}", e))?;
        }
        // Pie never reaches the cartesian path; see draw_chart.
        ChartStyle::Pie => {}
    }

    Ok(())
}

/// One slice per distinct kept category, sized by the category's value total.
/// Non-positive totals cannot form slices and are skipped.
fn draw_pie<DB>(root: &DrawingArea<DB, Shift>, view: &FilteredView, theme: Theme) -> Result<()>
where
    DB: DrawingBackend,
{
    let totals: Vec<(String, f64)> = category_totals(view)
        .into_iter()
        .filter(|(_, total)| *total > 0.0)
        .collect();
    if totals.is_empty() {
        return draw_placeholder(root, theme, "No positive totals to chart");
    }

    let text = theme.text();
    let title = format!("{} by {}", view.numeric_name(), view.categorical_name());
    let root = root
        .titled(
            &title,
            (FontFamily::SansSerif, 24).into_font().color(&text),
        )
        .map_err(|e| anyhow!("{:?}", e))?;

    let (w, h) = root.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = (w.min(h) as f64) * 0.35;
    let sizes: Vec<f64> = totals.iter().map(|(_, total)| *total).collect();
    let labels: Vec<String> = totals.iter().map(|(label, _)| label.clone()).collect();
    let colors: Vec<RGBColor> = (0..totals.len())
        .map(|i| OFFICE10[i % OFFICE10.len()])
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style((FontFamily::SansSerif, 16).into_font().color(&text));
    pie.percentages(
        (FontFamily::SansSerif, (radius * 0.10).max(12.0))
            .into_font()
            .color(&theme.background()),
    );
    root.draw(&pie).map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
