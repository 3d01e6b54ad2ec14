//! Error types for table transformations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// Column referenced by a transformation is absent.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Column exists but does not hold text.
    #[error("column '{column}' has dtype {dtype}, expected text")]
    NotText { column: String, dtype: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
