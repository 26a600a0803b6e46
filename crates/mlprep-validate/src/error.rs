use polars::prelude::PolarsError;

use crate::report::ValidationReport;

#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    /// The table broke the schema; carries every violation found.
    #[error("schema violation: {}", .0.summary())]
    SchemaViolation(ValidationReport),

    #[error("failed to build validated table: {0}")]
    Frame(#[from] PolarsError),
}

impl ValidateError {
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            ValidateError::SchemaViolation(report) => Some(report),
            ValidateError::Frame(_) => None,
        }
    }
}
