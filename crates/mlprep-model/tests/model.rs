//! Tests for mlprep-model types.

use mlprep_model::{ColumnSpec, ColumnType, Constraint, Scalar, Schema};

fn sample_schema() -> Schema {
    Schema::new()
        .with_column(
            ColumnSpec::new("age", ColumnType::Integer)
                .with_constraint(Constraint::between(18.0, 100.0)),
        )
        .with_column(ColumnSpec::new("segment", ColumnType::Categorical).nullable(true))
}

#[test]
fn schema_defaults_are_strict_and_coercing() {
    let schema = Schema::new();
    assert!(schema.strict);
    assert!(schema.coerce);
    assert!(schema.is_empty());
}

#[test]
fn schema_lookup_is_exact() {
    let schema = sample_schema();
    assert!(schema.contains("age"));
    assert!(!schema.contains("Age"));
    assert_eq!(
        schema.column_names().collect::<Vec<_>>(),
        vec!["age", "segment"]
    );
    assert!(schema.column("segment").expect("segment").nullable);
}

#[test]
fn schema_serializes_to_json() {
    let schema = sample_schema().strict(false);
    let json = serde_json::to_value(&schema).expect("serialize schema");
    assert_eq!(json["strict"], serde_json::json!(false));
    assert_eq!(json["columns"][0]["type"], serde_json::json!("integer"));
    assert_eq!(
        json["columns"][0]["constraint"],
        serde_json::json!({"kind": "range", "min": 18.0, "max": 100.0})
    );
    assert!(json["columns"][1].get("constraint").is_none());

    let round: Schema = serde_json::from_value(json).expect("deserialize schema");
    assert_eq!(round, schema);
}

#[test]
fn membership_values_deserialize_untagged() {
    let json = r#"{"kind": "one_of", "values": [0, 1.5, "x"]}"#;
    let constraint: Constraint = serde_json::from_str(json).expect("parse constraint");
    assert_eq!(
        constraint,
        Constraint::OneOf {
            values: vec![Scalar::Int(0), Scalar::Float(1.5), Scalar::from("x")]
        }
    );
}

#[test]
fn missing_flags_default_to_true() {
    let json = r#"{"columns": [{"name": "income", "type": "float"}]}"#;
    let schema: Schema = serde_json::from_str(json).expect("parse schema");
    assert!(schema.strict);
    assert!(schema.coerce);
    let income = schema.column("income").expect("income");
    assert!(!income.nullable);
    assert!(income.constraint.is_none());
}
