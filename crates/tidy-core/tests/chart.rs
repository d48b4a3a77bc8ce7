// File: crates/tidy-core/tests/chart.rs
// Purpose: Chart description produced by plot_functions and the builder's validation.

use tidy_core::{
    create_plotting_data, plot_functions, Aes, Chart, FunctionSet, Geom, Labels, PlotError,
};

#[test]
fn plot_functions_maps_columns_and_blanks_titles() {
    let funcs = FunctionSet::new().with("id", |x| x).with("neg", |x: f64| -x);
    let chart = plot_functions(&[-1.0, 1.0], 3, &funcs).expect("chart");

    assert_eq!(chart.aes(), &Aes::new("_x", "y").color("function"));
    assert_eq!(chart.layers(), &[Geom::Line]);
    assert_eq!(chart.labels(), &Labels::new("", ""));
    assert_eq!(chart.x_title(), "");
    assert_eq!(chart.y_title(), "");
    assert_eq!(chart.data().n_rows(), 6);

    let ids = chart.data().text_column("function").unwrap();
    assert_eq!(ids.iter().filter(|f| *f == "id").count(), 3);
    assert_eq!(ids.iter().filter(|f| *f == "neg").count(), 3);
}

#[test]
fn series_follow_legend_order() {
    let funcs = FunctionSet::new().with("zeta", f64::sin).with("alpha", f64::cos).with("mid", |x| x);
    let chart = plot_functions(&[0.0, 1.0], 11, &funcs).unwrap();
    let series = chart.series();
    let names: Vec<_> = series.iter().map(|s| s.name.as_deref().unwrap()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    assert!(series.iter().all(|s| s.len() == 11));
    // Row order inside a series is grid order.
    assert_eq!(series[2].data_xy.first(), Some(&(0.0, 0.0)));
    assert_eq!(series[2].data_xy.last(), Some(&(1.0, 1.0)));
}

#[test]
fn plot_functions_checks_domain_first() {
    let funcs = FunctionSet::new().with("sq", |x| x * x);
    for bad in [&[0.0][..], &[0.0, 1.0, 2.0][..]] {
        assert!(matches!(plot_functions(bad, 10, &funcs), Err(PlotError::InvalidDomain { .. })));
    }
    assert!(plot_functions(&[1.0, -1.0], 10, &funcs).is_ok());
}

#[test]
fn plot_functions_propagates_evaluation_errors() {
    let funcs = FunctionSet::new().with_fallible("recip", |x| if x == 0.0 { Err("division by zero") } else { Ok(1.0 / x) });
    let err = plot_functions(&[-2.0, 2.0], 5, &funcs).unwrap_err();
    assert!(matches!(err, PlotError::Evaluation { ref name, .. } if name == "recip"));
}

#[test]
fn empty_function_set_gives_empty_chart() {
    let chart = plot_functions(&[0.0, 1.0], 50, &FunctionSet::new()).expect("chart");
    assert_eq!(chart.data().n_rows(), 0);
    assert!(chart.series().is_empty());
}

#[test]
fn builder_validates_mapping() {
    let wide = create_plotting_data(&[0.0, 1.0], 4, &FunctionSet::new().with("sq", |x| x * x)).unwrap();

    assert!(matches!(Chart::builder(wide.clone()).geom(Geom::Line).build(), Err(PlotError::MissingAes)));
    assert!(matches!(
        Chart::builder(wide.clone()).aes(Aes::new("_x", "nope")).build(),
        Err(PlotError::UnknownColumn(c)) if c == "nope"
    ));
    assert!(matches!(
        Chart::builder(wide.clone()).aes(Aes::new("_x", "sq").color("group")).build(),
        Err(PlotError::UnknownColumn(c)) if c == "group"
    ));

    let long = wide.melt("_x", "function", "y").unwrap();
    assert!(matches!(
        Chart::builder(long).aes(Aes::new("_x", "function")).build(),
        Err(PlotError::ColumnType { .. })
    ));
}

#[test]
fn wide_chart_without_color_is_one_series() {
    let wide = create_plotting_data(&[0.0, 1.0], 4, &FunctionSet::new().with("sq", |x| x * x)).unwrap();
    let chart = Chart::builder(wide)
        .aes(Aes::new("_x", "sq"))
        .geom(Geom::Line)
        .title("squares")
        .build()
        .unwrap();
    let series = chart.series();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].name, None);
    assert_eq!(chart.x_title(), "_x");
    assert_eq!(chart.title(), Some("squares"));
}
