//! Per-cell checks for one declared column: coercion, nullability and the
//! value constraint. Every failing cell is reported on its own.

use mlprep_ingest::any_to_string;
use mlprep_model::{ColumnSpec, ColumnType, Constraint, Scalar};
use polars::prelude::{Column, NamedFrom, PolarsResult, Series};

use crate::coerce::{Coerced, coerce_value, dtype_matches};
use crate::issue::{Violation, ViolationKind};

/// Typed values of a column that passed (or partly passed) its checks.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Integer(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
    Categorical(Vec<Option<String>>),
}

impl ColumnValues {
    fn with_capacity(column_type: ColumnType, capacity: usize) -> Self {
        match column_type {
            ColumnType::Integer => ColumnValues::Integer(Vec::with_capacity(capacity)),
            ColumnType::Float => ColumnValues::Float(Vec::with_capacity(capacity)),
            ColumnType::Categorical => ColumnValues::Categorical(Vec::with_capacity(capacity)),
        }
    }

    fn push(&mut self, value: Option<&Scalar>) {
        match self {
            ColumnValues::Integer(values) => values.push(match value {
                Some(Scalar::Int(v)) => Some(*v),
                _ => None,
            }),
            ColumnValues::Float(values) => values.push(value.and_then(Scalar::as_f64)),
            ColumnValues::Categorical(values) => values.push(value.map(ToString::to_string)),
        }
    }

    pub fn into_column(self, name: &str) -> Column {
        match self {
            ColumnValues::Integer(values) => Series::new(name.into(), values).into(),
            ColumnValues::Float(values) => Series::new(name.into(), values).into(),
            ColumnValues::Categorical(values) => Series::new(name.into(), values).into(),
        }
    }
}

fn constraint_violation(constraint: &Constraint) -> ViolationKind {
    match constraint {
        Constraint::Range { min, max } => ViolationKind::OutOfRange {
            min: *min,
            max: *max,
        },
        Constraint::OneOf { values } => ViolationKind::NotAllowed {
            allowed: values.clone(),
        },
    }
}

/// Check every cell of `column` against `spec`.
///
/// Returns the coerced values alongside any violations. When `coerce` is off
/// and the dtype does not match, a single column-level violation is returned
/// and cells are not inspected.
pub fn check(
    spec: &ColumnSpec,
    column: &Column,
    coerce: bool,
) -> PolarsResult<(ColumnValues, Vec<Violation>)> {
    let height = column.len();
    let mut values = ColumnValues::with_capacity(spec.column_type, height);
    let mut violations = Vec::new();

    if !coerce && !dtype_matches(column.dtype(), spec.column_type) {
        violations.push(Violation::column(
            spec.name.as_str(),
            ViolationKind::DtypeMismatch {
                expected: spec.column_type,
                actual: column.dtype().to_string(),
            },
        ));
        return Ok((values, violations));
    }

    for row in 0..height {
        let raw = column.get(row)?;
        match coerce_value(&raw, spec.column_type) {
            Coerced::Invalid => {
                violations.push(Violation::cell(
                    spec.name.as_str(),
                    row,
                    Some(any_to_string(raw)),
                    ViolationKind::CoercionFailed {
                        expected: spec.column_type,
                    },
                ));
                values.push(None);
            }
            Coerced::Null => {
                if !spec.nullable {
                    violations.push(Violation::cell(
                        spec.name.as_str(),
                        row,
                        None,
                        ViolationKind::NullValue,
                    ));
                }
                values.push(None);
            }
            Coerced::Value(value) => {
                if let Some(constraint) = &spec.constraint
                    && !constraint.allows(&value)
                {
                    violations.push(Violation::cell(
                        spec.name.as_str(),
                        row,
                        Some(value.to_string()),
                        constraint_violation(constraint),
                    ));
                }
                values.push(Some(&value));
            }
        }
    }

    Ok((values, violations))
}
