// File: crates/tidy-core/tests/melt.rs
// Purpose: Wide-to-long reshape ordering, row counts and CSV export.

use std::collections::HashSet;

use tidy_core::{create_plotting_data, DataFrame, FunctionSet, PlotError};

fn id_neg() -> FunctionSet {
    FunctionSet::new().with("id", |x| x).with("neg", |x: f64| -x)
}

#[test]
fn long_form_is_grouped_by_function_in_insertion_order() {
    let wide = create_plotting_data(&[-1.0, 1.0], 3, &id_neg()).unwrap();
    let long = wide.melt("_x", "function", "y").expect("melt");

    assert_eq!(long.column_names().collect::<Vec<_>>(), vec!["_x", "function", "y"]);
    assert_eq!(long.n_rows(), 6);
    assert_eq!(long.float_column("_x").unwrap(), &[-1.0, 0.0, 1.0, -1.0, 0.0, 1.0]);
    assert_eq!(long.text_column("function").unwrap(), &["id", "id", "id", "neg", "neg", "neg"]);
    assert_eq!(long.float_column("y").unwrap(), &[-1.0, 0.0, 1.0, 1.0, 0.0, -1.0]);
}

#[test]
fn every_point_function_pair_appears_once() {
    let funcs = FunctionSet::new().with("a", f64::sin).with("b", f64::cos).with("c", f64::exp);
    let n = 17;
    let long = create_plotting_data(&[0.0, 2.0], n, &funcs).unwrap().melt("_x", "function", "y").unwrap();
    assert_eq!(long.n_rows(), n * 3);

    let xs = long.float_column("_x").unwrap();
    let names = long.text_column("function").unwrap();
    let pairs: HashSet<(u64, &str)> = xs.iter().zip(names).map(|(x, f)| (x.to_bits(), f.as_str())).collect();
    assert_eq!(pairs.len(), n * 3);
}

#[test]
fn single_function_example() {
    let funcs = FunctionSet::new().with("sq", |x| x * x);
    let long = create_plotting_data(&[0.0, 10.0], 5, &funcs).unwrap().melt("_x", "function", "y").unwrap();
    assert_eq!(long.n_rows(), 5);
    assert!(long.text_column("function").unwrap().iter().all(|f| f == "sq"));
    assert_eq!(long.float_column("y").unwrap(), &[0.0, 6.25, 25.0, 56.25, 100.0]);
}

#[test]
fn melt_without_value_columns_is_empty() {
    let wide = create_plotting_data(&[0.0, 1.0], 4, &FunctionSet::new()).unwrap();
    let long = wide.melt("_x", "function", "y").unwrap();
    assert_eq!(long.n_rows(), 0);
    assert_eq!(long.n_columns(), 3);
}

#[test]
fn melt_rejects_missing_id_and_text_values() {
    let wide = create_plotting_data(&[0.0, 1.0], 2, &id_neg()).unwrap();
    assert!(matches!(wide.melt("t", "function", "y"), Err(PlotError::UnknownColumn(c)) if c == "t"));

    let mut mixed = DataFrame::new();
    mixed.push_column("_x", vec![0.0, 1.0]).unwrap();
    mixed.push_column("tag", vec!["a".to_string(), "b".to_string()]).unwrap();
    assert!(matches!(mixed.melt("_x", "function", "y"), Err(PlotError::ColumnType { .. })));
}

#[test]
fn push_column_checks_names_and_lengths() {
    let mut df = DataFrame::new();
    df.push_column("_x", vec![0.0, 1.0, 2.0]).unwrap();
    assert!(matches!(df.push_column("_x", vec![1.0, 2.0, 3.0]), Err(PlotError::DuplicateColumn(_))));
    assert!(matches!(
        df.push_column("short", vec![1.0]),
        Err(PlotError::LengthMismatch { expected: 3, got: 1, .. })
    ));
}

#[test]
fn csv_export_has_header_and_rows() {
    let funcs = FunctionSet::new().with("sq", |x| x * x);
    let wide = create_plotting_data(&[0.0, 10.0], 5, &funcs).unwrap();
    let csv = wide.to_csv_string().expect("csv");
    assert_eq!(csv, "_x,sq\n0,0\n2.5,6.25\n5,25\n7.5,56.25\n10,100\n");

    let long = wide.melt("_x", "function", "y").unwrap();
    let csv = long.to_csv_string().expect("csv");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("_x,function,y"));
    assert_eq!(lines.next(), Some("0,sq,0"));
    assert_eq!(lines.count(), 4);
}
