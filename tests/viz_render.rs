use std::fs;
use std::path::PathBuf;
use tabdash::select::{self, FilteredView, Selection};
use tabdash::viz::{self, ChartStyle, Theme};
use tabdash::{Table, ingest};

fn sample_table() -> Table {
    let csv = "Region,Revenue\nEU,120.5\nUS,98.0\nAsia,143.25\nEU,77.0\n";
    ingest::read_csv(csv.as_bytes(), b',').unwrap()
}

fn full_view<'a>(table: &'a Table, x: &str, y: &str, style: ChartStyle) -> FilteredView<'a> {
    let selection = Selection {
        categorical_axis: x.into(),
        numeric_axis: y.into(),
        keep: select::distinct_values(table, x).unwrap(),
        style,
    };
    select::filter_view(table, &selection).unwrap()
}

fn write_and_check<F: Fn(&PathBuf)>(maker: F, name: &str, ext: &str) {
    let tmp = std::env::temp_dir();
    let path: PathBuf = tmp.join(format!("tabdash_viz_{}.{}", name, ext));
    maker(&path);
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "chart has content");
    fs::remove_file(&path).ok();
}

#[test]
fn every_style_produces_a_file() {
    let table = sample_table();
    for (i, style) in ChartStyle::ALL.iter().enumerate() {
        let view = full_view(&table, "Region", "Revenue", *style);
        write_and_check(
            |p| {
                viz::render_chart(&view, *style, Theme::Light, p, 800, 480).unwrap();
            },
            &format!("style{}", i),
            "svg",
        );
    }
}

#[test]
fn png_output_uses_the_bitmap_backend() {
    let table = sample_table();
    let view = full_view(&table, "Region", "Revenue", ChartStyle::Bar);
    write_and_check(
        |p| {
            viz::render_chart(&view, ChartStyle::Bar, Theme::Dark, p, 640, 400).unwrap();
        },
        "bitmap",
        "png",
    );
}

#[test]
fn empty_view_renders_a_placeholder_not_an_error() {
    let table = sample_table();
    let selection = Selection {
        categorical_axis: "Region".into(),
        numeric_axis: "Revenue".into(),
        keep: vec![], // excludes every row
        style: ChartStyle::Line,
    };
    let view = select::filter_view(&table, &selection).unwrap();
    assert!(view.is_empty());

    write_and_check(
        |p| {
            viz::render_chart(&view, ChartStyle::Line, Theme::Light, p, 800, 480).unwrap();
        },
        "empty",
        "svg",
    );
}

#[test]
fn pie_skips_nonpositive_totals() {
    let csv = "Region,Delta\nEU,-5\nUS,10\n";
    let table = ingest::read_csv(csv.as_bytes(), b',').unwrap();
    let view = full_view(&table, "Region", "Delta", ChartStyle::Pie);

    write_and_check(
        |p| {
            viz::render_chart(&view, ChartStyle::Pie, Theme::Light, p, 800, 480).unwrap();
        },
        "pie_negative",
        "svg",
    );
}
