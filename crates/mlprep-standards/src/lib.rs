#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod training;

pub use crate::error::StandardsError;
pub use crate::loader::{SCHEMA_ENV_VAR, check_schema, load_schema, parse_schema, resolve_schema};
pub use crate::training::training_schema;
