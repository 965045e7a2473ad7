//! Error types for kinelab
//!
//! Physical edge cases (an incline the body cannot slide down, a pendulum
//! trace without two peaks) are values, not errors. What remains here is
//! bad input and the I/O around rendering and export.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// kinelab error types
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter could not be brought into range (NaN)
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Samples handed to a trajectory were not strictly increasing in time
    #[error("sample {index} at t={t} does not follow t={previous}")]
    NonMonotonicTime {
        /// Offending sample index
        index: usize,
        /// Time of the offending sample
        t: f64,
        /// Time of the sample before it
        previous: f64,
    },

    /// An imported table did not have the expected shape
    #[error("malformed table: {0}")]
    MalformedTable(String),

    /// Plot or frame rendering failed
    #[error("render error: {0}")]
    Render(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Config parse error
    #[error("config error: {0}")]
    Json(#[from] serde_json::Error),
}

impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>> for Error {
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Self::Render(err.to_string())
    }
}
