//! Plan executor.

use mlprep_model::{EventSink, PipelineEvent, TracingSink};
use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use tracing::debug;

use crate::error::TransformError;
use crate::plan::{FeaturePlan, FeatureRule};

/// Derive the features in `plan` from `df`, reporting to `sink`.
///
/// Numeric rules cast their input to Float64; nulls stay null. Pass-through
/// rules copy the input column as is under the output name.
pub fn transform_frame(
    df: &DataFrame,
    plan: &FeaturePlan,
    sink: &dyn EventSink,
) -> Result<DataFrame, TransformError> {
    let missing: Vec<String> = plan
        .required_inputs()
        .into_iter()
        .filter(|name| df.column(name).is_err())
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(TransformError::ContractViolation { missing });
    }

    let mut columns = Vec::with_capacity(plan.len());
    for rule in &plan.rules {
        let input = df.column(&rule.input)?;
        columns.push(apply_rule(rule, input)?);
        debug!(output = %rule.output, input = %rule.input, op = %rule.op, "derived feature");
    }

    let features = DataFrame::new(columns)?;
    sink.record(&PipelineEvent::TransformCompleted {
        rows: features.height(),
        columns: features.width(),
    });
    Ok(features)
}

/// Derive the standard feature set, reporting through `tracing`.
pub fn transform_features(df: &DataFrame) -> Result<DataFrame, TransformError> {
    transform_frame(df, &FeaturePlan::standard(), &TracingSink)
}

fn apply_rule(rule: &FeatureRule, input: &Column) -> Result<Column, TransformError> {
    if !rule.op.is_numeric() {
        return Ok(input.clone().with_name(rule.output.as_str().into()));
    }

    let cast = input.cast(&DataType::Float64)?;
    let values: Vec<Option<f64>> = cast
        .f64()?
        .into_iter()
        .map(|value| value.map(|v| rule.op.apply(v)))
        .collect();
    Ok(Series::new(rule.output.as_str().into(), values).into_column())
}
