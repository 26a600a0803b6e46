//! Individual schema violations.

use std::fmt;

use mlprep_model::{ColumnType, Scalar};
use serde::Serialize;

/// What went wrong with a column or cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Declared in the schema, absent from the table.
    MissingColumn,
    /// Present in the table, not declared in a strict schema.
    UndeclaredColumn,
    /// Column dtype does not belong to the declared type (coercion disabled).
    DtypeMismatch {
        expected: ColumnType,
        actual: String,
    },
    /// Cell could not be converted to the declared type.
    CoercionFailed { expected: ColumnType },
    /// Null in a non-nullable column.
    NullValue,
    /// Value outside an inclusive range rule.
    OutOfRange { min: Option<f64>, max: Option<f64> },
    /// Value not in the allowed set.
    NotAllowed { allowed: Vec<Scalar> },
}

impl ViolationKind {
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::MissingColumn => "missing_column",
            ViolationKind::UndeclaredColumn => "undeclared_column",
            ViolationKind::DtypeMismatch { .. } => "dtype_mismatch",
            ViolationKind::CoercionFailed { .. } => "coercion_failed",
            ViolationKind::NullValue => "null_value",
            ViolationKind::OutOfRange { .. } => "out_of_range",
            ViolationKind::NotAllowed { .. } => "not_allowed",
        }
    }

    /// Column-set problems, as opposed to per-cell problems.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ViolationKind::MissingColumn
                | ViolationKind::UndeclaredColumn
                | ViolationKind::DtypeMismatch { .. }
        )
    }
}

/// One failed check, located by column and (for cell checks) 0-based row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub column: String,
    pub row: Option<usize>,
    pub value: Option<String>,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl Violation {
    pub fn column(column: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            column: column.into(),
            row: None,
            value: None,
            kind,
        }
    }

    pub fn cell(
        column: impl Into<String>,
        row: usize,
        value: Option<String>,
        kind: ViolationKind,
    ) -> Self {
        Self {
            column: column.into(),
            row: Some(row),
            value,
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {:?}", self.column)?;
        if let Some(row) = self.row {
            write!(f, ", row {row}")?;
        }
        let value = self.value.as_deref().unwrap_or("");
        match &self.kind {
            ViolationKind::MissingColumn => write!(f, ": declared in schema but missing from table"),
            ViolationKind::UndeclaredColumn => write!(f, ": not declared in schema"),
            ViolationKind::DtypeMismatch { expected, actual } => {
                write!(f, ": dtype {actual} does not match {expected}")
            }
            ViolationKind::CoercionFailed { expected } => {
                write!(f, ": cannot coerce {value:?} to {expected}")
            }
            ViolationKind::NullValue => write!(f, ": null in non-nullable column"),
            ViolationKind::OutOfRange { min, max } => {
                write!(f, ": value {value} is out of range")?;
                match (min, max) {
                    (Some(lo), Some(hi)) => write!(f, " [{lo}, {hi}]"),
                    (Some(lo), None) => write!(f, " (>= {lo})"),
                    (None, Some(hi)) => write!(f, " (<= {hi})"),
                    (None, None) => Ok(()),
                }
            }
            ViolationKind::NotAllowed { allowed } => {
                let rendered: Vec<String> = allowed.iter().map(ToString::to_string).collect();
                write!(f, ": value {value} is not one of {{{}}}", rendered.join(", "))
            }
        }
    }
}
