use mlprep_ingest::IngestError;
use mlprep_transform::TransformError;
use mlprep_validate::{ValidateError, ValidationReport};
use thiserror::Error;

/// Failure of any pipeline stage. Stage errors pass through unchanged.
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Validate(#[from] ValidateError),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl PrepareError {
    /// Violations, when the table failed schema validation.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            PrepareError::Validate(err) => err.report(),
            _ => None,
        }
    }
}
