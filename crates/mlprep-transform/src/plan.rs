//! Feature plan definitions.
//!
//! A plan is metadata: it says which column each feature is derived from and
//! how. The executor in [`crate::features`] interprets it.

use std::fmt;

/// Operation applied to an input column to produce a feature.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureOp {
    /// Divide each value by `divisor`.
    Scale { divisor: f64 },
    /// `ln(x + 1)`.
    Log1p,
    /// Copy the column unchanged.
    PassThrough,
}

impl FeatureOp {
    /// Short label for reports.
    pub fn display_name(&self) -> String {
        match self {
            FeatureOp::Scale { divisor } => format!("x / {divisor}"),
            FeatureOp::Log1p => "ln(x + 1)".to_string(),
            FeatureOp::PassThrough => "copy".to_string(),
        }
    }

    /// Whether the output is always Float64.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, FeatureOp::PassThrough)
    }

    /// Apply the operation to one numeric value.
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            FeatureOp::Scale { divisor } => value / divisor,
            FeatureOp::Log1p => value.ln_1p(),
            FeatureOp::PassThrough => value,
        }
    }
}

impl fmt::Display for FeatureOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// One output column derived from one input column.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRule {
    pub output: String,
    pub input: String,
    pub op: FeatureOp,
}

impl FeatureRule {
    pub fn new(output: impl Into<String>, input: impl Into<String>, op: FeatureOp) -> Self {
        Self {
            output: output.into(),
            input: input.into(),
            op,
        }
    }

    pub fn scale(output: impl Into<String>, input: impl Into<String>, divisor: f64) -> Self {
        Self::new(output, input, FeatureOp::Scale { divisor })
    }

    pub fn log1p(output: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(output, input, FeatureOp::Log1p)
    }

    pub fn pass_through(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(name.clone(), name, FeatureOp::PassThrough)
    }
}

/// Ordered feature rules. Output columns appear in rule order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturePlan {
    pub rules: Vec<FeatureRule>,
}

impl FeaturePlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// `age_scaled = age / 100`, `income_log = ln(income + 1)`, `target` copied.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(FeatureRule::scale("age_scaled", "age", 100.0))
            .with_rule(FeatureRule::log1p("income_log", "income"))
            .with_rule(FeatureRule::pass_through("target"))
    }

    pub fn with_rule(mut self, rule: FeatureRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Input columns in first-use order, without duplicates.
    pub fn required_inputs(&self) -> Vec<&str> {
        let mut inputs: Vec<&str> = Vec::new();
        for rule in &self.rules {
            if !inputs.contains(&rule.input.as_str()) {
                inputs.push(&rule.input);
            }
        }
        inputs
    }

    pub fn output_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.output.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_plan_layout() {
        let plan = FeaturePlan::standard();
        assert_eq!(plan.output_names(), ["age_scaled", "income_log", "target"]);
        assert_eq!(plan.required_inputs(), ["age", "income", "target"]);
    }

    #[test]
    fn required_inputs_are_deduplicated() {
        let plan = FeaturePlan::new()
            .with_rule(FeatureRule::scale("a", "x", 2.0))
            .with_rule(FeatureRule::log1p("b", "x"));
        assert_eq!(plan.required_inputs(), ["x"]);
    }

    #[test]
    fn op_apply() {
        assert_eq!(FeatureOp::Scale { divisor: 100.0 }.apply(50.0), 0.5);
        assert_eq!(FeatureOp::Log1p.apply(0.0), 0.0);
        assert_eq!(FeatureOp::PassThrough.apply(3.0), 3.0);
        assert_eq!(FeatureOp::Log1p.to_string(), "ln(x + 1)");
    }
}
