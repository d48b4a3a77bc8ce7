// File: crates/tidy-core/src/axis.rs
// Summary: Axis model with title and visible range.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Visible span, never below `1e-9` so pixel scaling stays finite.
    #[inline]
    pub fn span(&self) -> f64 { (self.max - self.min).max(1e-9) }

    /// Map `v` into `[0, 1]` along the axis (unclamped).
    #[inline]
    pub fn unit(&self, v: f64) -> f64 { (v - self.min) / self.span() }
}
