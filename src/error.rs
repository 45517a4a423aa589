use thiserror::Error;

/// Errors returned by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A distance metric other than Euclidean was requested.
    #[error("unsupported metric {requested:?}: only euclidean distance is supported")]
    UnsupportedMetric {
        /// The metric name that was requested.
        requested: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Row-shaped input is not one-dimensional.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// Sample weights do not line up with the samples.
    #[error("weight length mismatch: expected {expected} weights, found {found}")]
    WeightLengthMismatch {
        /// Number of samples.
        expected: usize,
        /// Number of weights supplied.
        found: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
