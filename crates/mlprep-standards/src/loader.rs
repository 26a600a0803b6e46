//! Schema file loading and resolution.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use mlprep_model::{ColumnType, Constraint, Scalar, Schema};
use tracing::debug;

use crate::error::StandardsError;
use crate::training::training_schema;

/// Environment variable naming a schema file to use instead of the built-in one.
pub const SCHEMA_ENV_VAR: &str = "MLPREP_SCHEMA";

/// Parse a schema from JSON text and check that it is well formed.
pub fn parse_schema(json: &str) -> Result<Schema, StandardsError> {
    let schema: Schema =
        serde_json::from_str(json).map_err(|source| StandardsError::Json { source })?;
    check_schema(&schema)?;
    Ok(schema)
}

/// Load a schema from a JSON file.
pub fn load_schema(path: &Path) -> Result<Schema, StandardsError> {
    let text = std::fs::read_to_string(path).map_err(|source| StandardsError::io(path, source))?;
    let schema = parse_schema(&text)?;
    debug!(path = %path.display(), columns = schema.len(), "loaded schema file");
    Ok(schema)
}

/// Pick the schema for a run.
///
/// Resolution order:
/// 1. `explicit` path, when given
/// 2. `MLPREP_SCHEMA` environment variable
/// 3. [`training_schema`]
pub fn resolve_schema(explicit: Option<&Path>) -> Result<Schema, StandardsError> {
    if let Some(path) = explicit {
        return load_schema(path);
    }
    if let Some(path) = std::env::var_os(SCHEMA_ENV_VAR) {
        return load_schema(&PathBuf::from(path));
    }
    Ok(training_schema())
}

/// Reject schemas the validator cannot interpret meaningfully.
pub fn check_schema(schema: &Schema) -> Result<(), StandardsError> {
    let mut seen = BTreeSet::new();
    for spec in &schema.columns {
        if !seen.insert(spec.name.as_str()) {
            return Err(StandardsError::DuplicateColumn {
                column: spec.name.clone(),
            });
        }
        match &spec.constraint {
            Some(Constraint::Range { min, max }) => {
                if spec.column_type == ColumnType::Categorical {
                    return Err(StandardsError::InvalidConstraint {
                        column: spec.name.clone(),
                        message: "range constraint on a categorical column".to_string(),
                    });
                }
                if let (Some(lo), Some(hi)) = (min, max)
                    && lo > hi
                {
                    return Err(StandardsError::InvalidConstraint {
                        column: spec.name.clone(),
                        message: format!("lower bound {lo} exceeds upper bound {hi}"),
                    });
                }
            }
            Some(Constraint::OneOf { values }) => {
                if let Some(value) = values
                    .iter()
                    .find(|value| !value_fits(spec.column_type, value))
                {
                    return Err(StandardsError::InvalidConstraint {
                        column: spec.name.clone(),
                        message: format!(
                            "allowed value {value} does not fit a {} column",
                            spec.column_type
                        ),
                    });
                }
            }
            None => {}
        }
    }
    Ok(())
}

/// Numeric columns take numeric allowed values; categorical columns take text.
fn value_fits(column_type: ColumnType, value: &Scalar) -> bool {
    let is_text = matches!(value, Scalar::Text(_));
    column_type.is_numeric() != is_text
}
