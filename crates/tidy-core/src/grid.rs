// File: crates/tidy-core/src/grid.rs
// Summary: Evenly spaced sample grids.

use crate::domain::Domain;

/// `steps` evenly spaced values from `start` to `end`, both included.
/// `steps == 0` is empty and `steps == 1` is `[start]`. The last value is
/// exactly `end`, not the accumulated `start + step * (steps - 1)`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
            out[steps - 1] = end;
            out
        }
    }
}

/// Grid over a validated domain.
pub fn sample_grid(domain: Domain, steps: usize) -> Vec<f64> {
    linspace(domain.start, domain.end, steps)
}
