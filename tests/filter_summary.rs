use tabdash::select::{self, Selection};
use tabdash::viz::ChartStyle;
use tabdash::{Table, ingest, stats};

fn sales_table() -> Table {
    let csv = "Region,Revenue\nEU,10%\nUS,\"20,5%\"\nAsia,30%\nEU,30%\n";
    ingest::read_csv(csv.as_bytes(), b',').unwrap()
}

fn selection(keep: Vec<String>) -> Selection {
    Selection {
        categorical_axis: "Region".into(),
        numeric_axis: "Revenue".into(),
        keep,
        style: ChartStyle::Bar,
    }
}

#[test]
fn default_keep_set_shows_every_row() {
    let table = sales_table();
    let keep = select::distinct_values(&table, "Region").unwrap();
    assert_eq!(keep, vec!["EU", "US", "Asia"]); // first-occurrence order

    let view = select::filter_view(&table, &selection(keep)).unwrap();
    assert_eq!(view.n_rows(), 4);
    assert_eq!(
        view.labels().collect::<Vec<_>>(),
        vec!["EU", "US", "Asia", "EU"]
    );
}

#[test]
fn filtering_preserves_row_order_and_is_idempotent() {
    let table = sales_table();
    let keep = vec!["EU".to_string(), "Asia".to_string()];
    let view = select::filter_view(&table, &selection(keep.clone())).unwrap();

    assert_eq!(view.labels().collect::<Vec<_>>(), vec!["EU", "Asia", "EU"]);

    let again = view.retain(&keep);
    assert_eq!(
        again.rows().collect::<Vec<_>>(),
        view.rows().collect::<Vec<_>>()
    );
}

#[test]
fn empty_keep_set_yields_empty_view_and_no_summary() {
    let table = sales_table();
    let view = select::filter_view(&table, &selection(vec![])).unwrap();
    assert!(view.is_empty());
    assert_eq!(stats::summarize(&view), None);
}

#[test]
fn summary_matches_the_percent_scenario() {
    let table = sales_table();

    let pair = select::filter_view(
        &table,
        &selection(vec!["US".into(), "Asia".into()]),
    )
    .unwrap();
    let summary = stats::summarize(&pair).unwrap();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.max, 30.0);
    assert_eq!(summary.min, 20.5);

    let full = select::filter_view(
        &table,
        &selection(vec!["EU".into(), "US".into(), "Asia".into()]),
    )
    .unwrap();
    let summary = stats::summarize(&full).unwrap();
    assert_eq!(summary.max, 30.0);
    assert_eq!(summary.min, 10.0);
    assert!(summary.min <= summary.mean && summary.mean <= summary.max);
}

#[test]
fn mean_displays_rounded_to_two_decimals() {
    let csv = "Region,Sales\nEU,10\nUS,\"20,5\"\nAsia,30\n";
    let table = ingest::read_csv(csv.as_bytes(), b',').unwrap();
    let view = select::filter_view(
        &table,
        &Selection {
            categorical_axis: "Region".into(),
            numeric_axis: "Sales".into(),
            keep: select::distinct_values(&table, "Region").unwrap(),
            style: ChartStyle::Bar,
        },
    )
    .unwrap();

    let summary = stats::summarize(&view).unwrap();
    assert_eq!(stats::fmt_value(summary.mean), "20.17");
    assert_eq!(stats::fmt_value(summary.max), "30.00");
    assert_eq!(stats::fmt_value(summary.min), "10.00");
}

#[test]
fn max_and_min_ties_report_the_first_row() {
    let csv = "City,Score\nParis,5\nRome,9\nOslo,9\nBonn,5\n";
    let table = ingest::read_csv(csv.as_bytes(), b',').unwrap();
    let view = select::filter_view(
        &table,
        &Selection {
            categorical_axis: "City".into(),
            numeric_axis: "Score".into(),
            keep: select::distinct_values(&table, "City").unwrap(),
            style: ChartStyle::Bar,
        },
    )
    .unwrap();

    let summary = stats::summarize(&view).unwrap();
    assert_eq!(summary.max_label, "Rome");
    assert_eq!(summary.min_label, "Paris");
}

#[test]
fn category_totals_aggregate_per_distinct_label() {
    let table = sales_table();
    let view = select::filter_view(
        &table,
        &selection(vec!["EU".into(), "US".into(), "Asia".into()]),
    )
    .unwrap();

    // One entry per distinct Region, sized by summed Revenue (the pie rule).
    let totals = stats::category_totals(&view);
    assert_eq!(
        totals,
        vec![
            ("EU".to_string(), 40.0),
            ("US".to_string(), 20.5),
            ("Asia".to_string(), 30.0),
        ]
    );
}

#[test]
fn axis_role_mismatch_is_an_error() {
    let table = sales_table();
    let swapped = Selection {
        categorical_axis: "Revenue".into(),
        numeric_axis: "Region".into(),
        keep: vec![],
        style: ChartStyle::Bar,
    };
    assert!(select::filter_view(&table, &swapped).is_err());

    let unknown = Selection {
        categorical_axis: "Nope".into(),
        numeric_axis: "Revenue".into(),
        keep: vec![],
        style: ChartStyle::Bar,
    };
    assert!(select::filter_view(&table, &unknown).is_err());
}
