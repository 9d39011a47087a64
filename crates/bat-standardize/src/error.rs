use polars::prelude::PolarsError;
use thiserror::Error;

/// Failures that abort a standardization call.
///
/// Only structural problems are errors. Rows that cannot be classified and
/// codes missing from the remap table are advisory and never surface here.
#[derive(Debug, Error)]
pub enum StandardizeError {
    #[error("required field `{field}` is absent from the record set")]
    MissingField { field: &'static str },
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, StandardizeError>;
