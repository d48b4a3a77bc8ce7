// File: crates/tidy-core/src/lib.rs
// Summary: Library entry point; samples named functions into tables and describes/renders line charts.

pub mod error;
pub mod domain;
pub mod grid;
pub mod function;
pub mod frame;
pub mod sample;
pub mod plot;
pub mod chart;
pub mod series;
pub mod axis;
pub mod view;
pub mod types;
pub mod theme;
pub mod text;
pub mod render;

pub use error::{EvalError, PlotError, Result};
pub use domain::Domain;
pub use grid::linspace;
pub use function::{BoxedScalarFn, Fallible, FunctionSet, ScalarFn};
pub use frame::{Column, ColumnData, DataFrame};
pub use sample::{create_plotting_data, DEFAULT_SAMPLES, X_COLUMN};
pub use plot::{plot_functions, FUNCTION_COLUMN, Y_COLUMN};
pub use chart::{Aes, Chart, ChartBuilder, Geom, Labels};
pub use series::Series;
pub use axis::Axis;
pub use view::ViewState;
pub use theme::Theme;
pub use render::RenderOptions;
