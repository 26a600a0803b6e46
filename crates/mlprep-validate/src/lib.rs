//! Schema-driven validation of tabular data.
//!
//! - **validator**: interprets a declarative [`mlprep_model::Schema`]
//! - **checks**: column-set and per-cell checks
//! - **coerce**: conversion of cells to declared types
//! - **quality**: advisory checks on raw tables

pub mod checks;
pub mod coerce;
pub mod error;
pub mod issue;
pub mod quality;
pub mod report;
pub mod validator;

pub use error::ValidateError;
pub use issue::{Violation, ViolationKind};
pub use quality::{QualityIssue, QualityReport, check_quality};
pub use report::ValidationReport;
pub use validator::{Validator, validate, validate_frame};
