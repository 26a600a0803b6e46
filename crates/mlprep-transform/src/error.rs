use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("input table is missing required columns: {}", missing.join(", "))]
    ContractViolation { missing: Vec<String> },
    #[error(transparent)]
    Frame(#[from] PolarsError),
}
