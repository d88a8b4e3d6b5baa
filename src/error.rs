use thiserror::Error;

/// Errors returned while validating input or fitting a clustering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KMeansError {
    /// The observation table has no rows or no columns.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: &'static str },

    /// A cell of the observation table is missing (`NaN`).
    #[error("missing value at row {row}, column {column}")]
    MissingValue { row: usize, column: usize },

    /// Two vectors that must share a dimensionality do not.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// More clusters requested than there are observations to seed them.
    #[error("invalid cluster count: requested {requested}, but table has {n_observations} observations")]
    InvalidClusterCount {
        requested: usize,
        n_observations: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        name: &'static str,
        message: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, KMeansError>;
