// File: crates/tidy-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs and RGBA buffers.

use tidy_core::{plot_functions, theme, FunctionSet, RenderOptions};

fn trig() -> FunctionSet {
    FunctionSet::new().with("sin", f64::sin).with("cos", f64::cos)
}

#[test]
fn render_smoke_png() {
    let chart = plot_functions(&[-3.0, 3.0], 200, &trig()).expect("chart");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/functions.png");
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let chart = plot_functions(&[0.0, 4.0], 5, &trig()).expect("chart");

    let opts = RenderOptions { width: 320, height: 200, draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (320, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque theme background.
    let bg = opts.theme.background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn render_handles_poles_and_empty_charts() {
    let funcs = FunctionSet::new().with("recip", |x| 1.0 / x).with("ln", f64::ln);
    let chart = plot_functions(&[-1.0, 1.0], 21, &funcs).expect("chart");
    let opts = RenderOptions { theme: theme::find("light"), draw_labels: false, ..RenderOptions::default() };
    assert!(chart.render_to_png_bytes(&opts).is_ok());

    let empty = plot_functions(&[0.0, 1.0], 10, &FunctionSet::new()).expect("chart");
    assert!(empty.render_to_png_bytes(&opts).is_ok());
}

#[test]
fn render_rejects_empty_surface() {
    let chart = plot_functions(&[0.0, 1.0], 10, &trig()).expect("chart");
    let opts = RenderOptions { width: 0, ..RenderOptions::default() };
    assert!(chart.render_to_rgba8(&opts).is_err());
}
