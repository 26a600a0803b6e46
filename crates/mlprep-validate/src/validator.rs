//! Schema validator.
//!
//! Interprets a [`Schema`] against a `DataFrame`: column-set checks, then
//! per-cell coercion, nullability and constraint checks for every declared
//! column. A table with any violation is rejected as a whole; a clean table
//! is rebuilt with only the declared columns, in schema order, holding the
//! coerced values. The input frame is never modified.

use mlprep_model::{EventSink, PipelineEvent, Schema, TracingSink};
use polars::prelude::{Column, DataFrame};
use tracing::debug;

use crate::checks::{cells, columns};
use crate::error::ValidateError;
use crate::report::ValidationReport;

/// Validates tables against one schema.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    schema: &'a Schema,
}

impl<'a> Validator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Run every check and build the coerced columns.
    fn evaluate(&self, df: &DataFrame) -> Result<(Vec<Column>, ValidationReport), ValidateError> {
        let table_columns: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();

        let mut report = ValidationReport::new();
        report.extend(columns::check(self.schema, &table_columns));

        let mut output = Vec::with_capacity(self.schema.len());
        for spec in &self.schema.columns {
            let Ok(column) = df.column(&spec.name) else {
                // Reported by the column-set check.
                continue;
            };
            let (values, violations) = cells::check(spec, column, self.schema.coerce)?;
            debug!(
                column = %spec.name,
                violations = violations.len(),
                "checked column"
            );
            report.extend(violations);
            output.push(values.into_column(&spec.name));
        }

        Ok((output, report))
    }

    /// Collect violations without building an output table.
    pub fn check(&self, df: &DataFrame) -> Result<ValidationReport, ValidateError> {
        self.evaluate(df).map(|(_, report)| report)
    }

    /// Validate `df`, reporting the outcome to `sink`.
    pub fn validate(
        &self,
        df: &DataFrame,
        sink: &dyn EventSink,
    ) -> Result<DataFrame, ValidateError> {
        let (columns, report) = self.evaluate(df)?;

        if !report.is_empty() {
            sink.record(&PipelineEvent::ValidationFailed {
                violations: report.len(),
                summary: report.summary(),
            });
            return Err(ValidateError::SchemaViolation(report));
        }

        let validated = DataFrame::new(columns)?;
        sink.record(&PipelineEvent::ValidationPassed {
            rows: validated.height(),
            columns: validated.width(),
        });
        Ok(validated)
    }
}

/// Validate `df` against `schema`, reporting to `sink`.
pub fn validate_frame(
    df: &DataFrame,
    schema: &Schema,
    sink: &dyn EventSink,
) -> Result<DataFrame, ValidateError> {
    Validator::new(schema).validate(df, sink)
}

/// Validate `df` against `schema`, reporting through `tracing`.
pub fn validate(df: &DataFrame, schema: &Schema) -> Result<DataFrame, ValidateError> {
    validate_frame(df, schema, &TracingSink)
}
