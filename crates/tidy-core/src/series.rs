// File: crates/tidy-core/src/series.rs
// Summary: Per-category (x, y) point runs derived from a chart's long-form data.

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Legend entry; `None` when the chart has no color mapping.
    pub name: Option<String>,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn with_data(name: Option<String>, data: Vec<(f64, f64)>) -> Self {
        Self { name, data_xy: data }
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Points with both coordinates finite. Non-finite samples (poles,
    /// `ln` of negatives) split the line instead of being drawn.
    pub fn finite_runs(&self) -> Vec<&[(f64, f64)]> {
        self.data_xy
            .split(|&(x, y)| !x.is_finite() || !y.is_finite())
            .filter(|run| !run.is_empty())
            .collect()
    }
}
