//! Tests for feature derivation.

use mlprep_model::{NoopSink, RecordingSink};
use mlprep_transform::{
    FeatureOp, FeaturePlan, FeatureRule, TransformError, transform_features, transform_frame,
};
use polars::prelude::*;
use proptest::prelude::{prop_assert, proptest};

fn validated_df(age: Vec<i64>, income: Vec<f64>, target: Vec<i64>) -> DataFrame {
    DataFrame::new(vec![
        Series::new("age".into(), age).into(),
        Series::new("income".into(), income).into(),
        Series::new("target".into(), target).into(),
    ])
    .unwrap()
}

fn f64_at(df: &DataFrame, column: &str, idx: usize) -> f64 {
    df.column(column).unwrap().f64().unwrap().get(idx).unwrap()
}

#[test]
fn test_standard_features_values() {
    let df = validated_df(vec![50], vec![9.0], vec![1]);

    let features = transform_features(&df).unwrap();

    assert_eq!(features.height(), 1);
    assert!((f64_at(&features, "age_scaled", 0) - 0.5).abs() < 1e-9);
    assert!((f64_at(&features, "income_log", 0) - 10f64.ln()).abs() < 1e-9);
    assert!((f64_at(&features, "income_log", 0) - 2.302585).abs() < 1e-6);
    let target = features.column("target").unwrap().i64().unwrap();
    assert_eq!(target.get(0), Some(1));
}

#[test]
fn test_output_columns() {
    let df = DataFrame::new(vec![
        Series::new("age".into(), vec![25i64, 40]).into(),
        Series::new("income".into(), vec![50000i64, 100000]).into(),
        Series::new("target".into(), vec![1i64, 0]).into(),
    ])
    .unwrap();

    let features = transform_features(&df).unwrap();

    let names: Vec<&str> = features
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(names, ["age_scaled", "income_log", "target"]);
    assert!((f64_at(&features, "age_scaled", 1) - 0.4).abs() < 1e-9);
    assert!((f64_at(&features, "income_log", 0) - 50001f64.ln()).abs() < 1e-9);
}

#[test]
fn test_transform_is_deterministic() {
    let df = validated_df(vec![18, 65, 100], vec![0.0, 1234.5, 98000.0], vec![0, 1, 0]);

    let first = transform_features(&df).unwrap();
    let second = transform_features(&df).unwrap();

    assert!(first.equals(&second));
}

#[test]
fn test_transform_does_not_mutate_input() {
    let df = validated_df(vec![30, 45], vec![100.0, 200.0], vec![1, 0]);
    let before = df.clone();

    let _ = transform_features(&df).unwrap();

    assert!(df.equals(&before));
    assert_eq!(df.width(), 3);
}

#[test]
fn test_missing_inputs_are_a_contract_violation() {
    let df = DataFrame::new(vec![Series::new("age".into(), vec![30i64]).into()]).unwrap();

    let err = transform_features(&df).unwrap_err();

    match err {
        TransformError::ContractViolation { missing } => {
            assert_eq!(missing, vec!["income".to_string(), "target".to_string()]);
        }
        other => panic!("expected contract violation, got {other:?}"),
    }
}

#[test]
fn test_extra_columns_are_ignored() {
    let mut df = validated_df(vec![30], vec![100.0], vec![1]);
    df.with_column(Series::new("note".into(), vec!["x"])).unwrap();

    let features = transform_features(&df).unwrap();

    assert_eq!(features.width(), 3);
    assert!(features.column("note").is_err());
}

#[test]
fn test_empty_table() {
    let df = validated_df(vec![], vec![], vec![]);

    let features = transform_features(&df).unwrap();

    assert_eq!(features.height(), 0);
    assert_eq!(features.width(), 3);
}

#[test]
fn test_custom_plan_and_event() {
    let df = validated_df(vec![40], vec![9.0], vec![0]);
    let plan = FeaturePlan::new()
        .with_rule(FeatureRule::new("age_tenths", "age", FeatureOp::Scale { divisor: 10.0 }))
        .with_rule(FeatureRule::log1p("income_log", "income"));
    let sink = RecordingSink::new();

    let features = transform_frame(&df, &plan, &sink).unwrap();

    assert_eq!(features.width(), 2);
    assert!((f64_at(&features, "age_tenths", 0) - 4.0).abs() < 1e-12);
    assert_eq!(sink.names(), vec!["transform_completed"]);
}

#[test]
fn test_column_order_does_not_change_features() {
    let df = validated_df(vec![25, 40], vec![50000.0, 100000.0], vec![1, 0]);
    let reordered = df.select(["target", "income", "age"]).unwrap();

    let a = transform_frame(&df, &FeaturePlan::standard(), &NoopSink).unwrap();
    let b = transform_frame(&reordered, &FeaturePlan::standard(), &NoopSink).unwrap();

    assert!(a.equals(&b));
}

proptest! {
    #[test]
    fn scaled_age_stays_within_unit_interval(age in 18i64..=100, income in 0f64..1e9) {
        let df = validated_df(vec![age], vec![income], vec![0]);
        let features = transform_features(&df).unwrap();
        let scaled = f64_at(&features, "age_scaled", 0);
        let logged = f64_at(&features, "income_log", 0);
        prop_assert!((0.18..=1.0).contains(&scaled));
        prop_assert!(logged >= 0.0);
    }
}
