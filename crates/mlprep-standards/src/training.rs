//! The canonical training schema.

use mlprep_model::{ColumnSpec, ColumnType, Constraint, Schema};

pub const AGE: &str = "age";
pub const INCOME: &str = "income";
pub const TARGET: &str = "target";

/// Schema every training dataset must satisfy.
///
/// - `age`: integer in `[18, 100]`
/// - `income`: float, `>= 0`
/// - `target`: integer label in `{0, 1}`
///
/// None of the columns are nullable. The schema is strict (undeclared columns
/// are rejected) and coercing (`"25"` becomes `25` before the range check).
pub fn training_schema() -> Schema {
    Schema::new()
        .with_column(
            ColumnSpec::new(AGE, ColumnType::Integer)
                .with_constraint(Constraint::between(18.0, 100.0)),
        )
        .with_column(
            ColumnSpec::new(INCOME, ColumnType::Float).with_constraint(Constraint::at_least(0.0)),
        )
        .with_column(
            ColumnSpec::new(TARGET, ColumnType::Integer)
                .with_constraint(Constraint::one_of([0i64, 1])),
        )
        .strict(true)
        .coerce(true)
}
