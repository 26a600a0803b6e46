//! Tests for the canonical schema and schema files.

use std::path::PathBuf;

use mlprep_model::{ColumnType, Constraint, Scalar};
use mlprep_standards::{StandardsError, load_schema, training_schema};

fn shipped_schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schemas/training.json")
}

#[test]
fn training_schema_declares_three_columns_in_order() {
    let schema = training_schema();
    assert_eq!(
        schema.column_names().collect::<Vec<_>>(),
        vec!["age", "income", "target"]
    );
    assert!(schema.strict);
    assert!(schema.coerce);
    assert!(schema.columns.iter().all(|spec| !spec.nullable));
}

#[test]
fn training_schema_constraints() {
    let schema = training_schema();

    let age = schema.column("age").unwrap();
    assert_eq!(age.column_type, ColumnType::Integer);
    assert_eq!(age.constraint, Some(Constraint::between(18.0, 100.0)));

    let income = schema.column("income").unwrap();
    assert_eq!(income.column_type, ColumnType::Float);
    assert_eq!(
        income.constraint,
        Some(Constraint::Range {
            min: Some(0.0),
            max: None
        })
    );

    let target = schema.column("target").unwrap();
    assert_eq!(target.column_type, ColumnType::Integer);
    assert_eq!(
        target.constraint,
        Some(Constraint::OneOf {
            values: vec![Scalar::Int(0), Scalar::Int(1)]
        })
    );
}

#[test]
fn shipped_schema_file_matches_builtin() {
    let loaded = load_schema(&shipped_schema_path()).expect("load shipped schema");
    assert_eq!(loaded, training_schema());
}

#[test]
fn missing_schema_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = load_schema(&path).unwrap_err();
    match err {
        StandardsError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_schema_file_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{\"columns\": [").unwrap();
    let err = load_schema(&path).unwrap_err();
    assert!(matches!(err, StandardsError::Json { .. }));
}
