// File: crates/tidy-core/src/plot.rs
// Summary: One-call line chart of named functions over a domain.

use crate::chart::{Aes, Chart, Geom, Labels};
use crate::domain::Domain;
use crate::error::Result;
use crate::function::FunctionSet;
use crate::sample::{create_plotting_data, X_COLUMN};

/// Long-form column holding the function name.
pub const FUNCTION_COLUMN: &str = "function";
/// Long-form column holding the function value.
pub const Y_COLUMN: &str = "y";

/// Sample `funcs` over `domain` and describe a line chart of them: `_x` on
/// the x-axis, the value on the y-axis, one color per function, blank axis
/// titles. Nothing is drawn; see [`Chart::render_to_png`].
///
/// Fails before any sampling if `domain` is not exactly `[start, end]`.
/// Sampling errors are returned unchanged.
pub fn plot_functions(domain: &[f64], n: usize, funcs: &FunctionSet) -> Result<Chart> {
    Domain::from_slice(domain)?;

    let long = create_plotting_data(domain, n, funcs)?.melt(X_COLUMN, FUNCTION_COLUMN, Y_COLUMN)?;

    Chart::builder(long)
        .aes(Aes::new(X_COLUMN, Y_COLUMN).color(FUNCTION_COLUMN))
        .geom(Geom::Line)
        .labs(Labels::new("", ""))
        .build()
}
