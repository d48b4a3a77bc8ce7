// File: crates/tidy-core/src/sample.rs
// Summary: Samples named functions over a linear grid into a wide table.

use crate::domain::Domain;
use crate::error::{PlotError, Result};
use crate::frame::DataFrame;
use crate::function::FunctionSet;
use crate::grid::sample_grid;

/// Name of the grid column.
pub const X_COLUMN: &str = "_x";

/// Sample count used when the caller has no preference.
pub const DEFAULT_SAMPLES: usize = 100;

/// Evaluate every function in `funcs` on `n` evenly spaced points of `domain`.
///
/// The result has an `_x` column with the grid followed by one column per
/// function, in the set's insertion order. `domain` must hold exactly two
/// values; they may be given in either order.
///
/// The first failing evaluation aborts the whole call with
/// [`PlotError::Evaluation`], carrying the function's own error as source.
pub fn create_plotting_data(domain: &[f64], n: usize, funcs: &FunctionSet) -> Result<DataFrame> {
    let domain = Domain::from_slice(domain)?;
    let mut df = DataFrame::new();
    df.push_column(X_COLUMN, sample_grid(domain, n))?;

    for (name, f) in funcs.iter() {
        if df.column(name).is_some() {
            return Err(PlotError::DuplicateColumn(name.to_string()));
        }
        let values = df.try_map_float(X_COLUMN, |x| {
            f.eval(x).map_err(|source| PlotError::Evaluation { name: name.to_string(), x, source })
        })?;
        df.push_column(name, values)?;
    }

    tracing::debug!(
        start = domain.start,
        end = domain.end,
        n,
        functions = funcs.len(),
        "sampled plotting data"
    );
    Ok(df)
}
