// File: crates/tidy-core/src/domain.rs
// Summary: Closed sampling interval [start, end] and its shape check.

use crate::error::{PlotError, Result};

/// A closed interval to sample over.
/// Contract: none on ordering; `start > end` samples right to left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub start: f64,
    pub end: f64,
}

impl Domain {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Validate a `[start, end]` slice. Anything but exactly two elements is
    /// rejected with [`PlotError::InvalidDomain`].
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [start, end] => Ok(Self { start, end }),
            _ => Err(PlotError::InvalidDomain { len: values.len() }),
        }
    }
}

impl TryFrom<&[f64]> for Domain {
    type Error = PlotError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl From<(f64, f64)> for Domain {
    fn from((start, end): (f64, f64)) -> Self {
        Self { start, end }
    }
}

impl From<[f64; 2]> for Domain {
    fn from([start, end]: [f64; 2]) -> Self {
        Self { start, end }
    }
}
