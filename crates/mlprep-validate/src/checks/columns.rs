//! Column-set checks.
//!
//! Every declared column must be present; under a strict schema every table
//! column must be declared. Names match exactly, so `Age` neither satisfies
//! nor is excused by a declared `age`.

use mlprep_model::Schema;

use crate::issue::{Violation, ViolationKind};

pub fn check(schema: &Schema, table_columns: &[String]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for name in schema.column_names() {
        if !table_columns.iter().any(|column| column == name) {
            violations.push(Violation::column(name, ViolationKind::MissingColumn));
        }
    }

    if schema.strict {
        for column in table_columns {
            if !schema.contains(column) {
                violations.push(Violation::column(
                    column.as_str(),
                    ViolationKind::UndeclaredColumn,
                ));
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlprep_model::{ColumnSpec, ColumnType};

    fn schema() -> Schema {
        Schema::new()
            .with_column(ColumnSpec::new("age", ColumnType::Integer))
            .with_column(ColumnSpec::new("target", ColumnType::Integer))
    }

    fn names(columns: &[&str]) -> Vec<String> {
        columns.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn reports_both_directions() {
        let violations = check(&schema(), &names(&["Age", "target"]));
        assert_eq!(
            violations,
            vec![
                Violation::column("age", ViolationKind::MissingColumn),
                Violation::column("Age", ViolationKind::UndeclaredColumn),
            ]
        );
    }

    #[test]
    fn lenient_schema_ignores_extra_columns() {
        let violations = check(&schema().strict(false), &names(&["age", "target", "note"]));
        assert!(violations.is_empty());
    }
}
