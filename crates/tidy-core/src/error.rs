// File: crates/tidy-core/src/error.rs
// Summary: Error type shared by sampling, table and chart operations.

use thiserror::Error;

/// Error raised by a user-supplied function. Kept boxed so any error type can
/// travel back to the caller untouched.
pub type EvalError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("domain must be a list of two elements [start, end], got {len}")]
    InvalidDomain { len: usize },

    #[error("function `{name}` failed at x = {x}: {source}")]
    Evaluation {
        name: String,
        x: f64,
        #[source]
        source: EvalError,
    },

    #[error("column `{0}` not found")]
    UnknownColumn(String),

    #[error("column `{0}` already exists")]
    DuplicateColumn(String),

    #[error("column `{name}` has {got} rows, table has {expected}")]
    LengthMismatch { name: String, expected: usize, got: usize },

    #[error("column `{name}` is not a {expected} column")]
    ColumnType { name: String, expected: &'static str },

    #[error("chart has no aesthetic mapping")]
    MissingAes,

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl PlotError {
    /// The error the user function raised, if this is an evaluation failure.
    pub fn evaluation_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            PlotError::Evaluation { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

pub type Result<T, E = PlotError> = std::result::Result<T, E>;
