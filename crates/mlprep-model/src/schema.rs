//! Declarative table schema.
//!
//! A [`Schema`] is plain data: an ordered list of [`ColumnSpec`] entries plus
//! the `strict` and `coerce` flags. The validator interprets it generically,
//! so adding a column means extending the list rather than writing new checks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// 64-bit signed integer values.
    Integer,
    /// 64-bit floating-point values.
    Float,
    /// Categorical or ordinal codes stored as text.
    Categorical,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Categorical => "categorical",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "integer" | "int" => Ok(ColumnType::Integer),
            "float" | "double" => Ok(ColumnType::Float),
            "categorical" | "category" | "text" => Ok(ColumnType::Categorical),
            other => Err(format!("unknown column type: {other}")),
        }
    }
}

/// A single typed cell value.
///
/// Serialized untagged so schema files can write `[0, 1]` or `["a", "b"]`
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Numeric view of the value; `None` for text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(v) => Some(*v as f64),
            Scalar::Float(v) => Some(*v),
            Scalar::Text(_) => None,
        }
    }

    /// Value equality across numeric representations (`1` matches `1.0`).
    pub fn matches(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Text(a), Scalar::Text(b)) => a == b,
            (Scalar::Text(_), _) | (_, Scalar::Text(_)) => false,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

/// Value rule applied to every non-null cell of a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    /// Inclusive numeric range; either bound may be omitted.
    Range {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    /// Membership in an explicit finite set.
    OneOf { values: Vec<Scalar> },
}

impl Constraint {
    pub fn between(min: f64, max: f64) -> Self {
        Constraint::Range {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn at_least(min: f64) -> Self {
        Constraint::Range {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: f64) -> Self {
        Constraint::Range {
            min: None,
            max: Some(max),
        }
    }

    pub fn one_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        Constraint::OneOf {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true when `value` satisfies the rule.
    ///
    /// Range rules never accept text values.
    pub fn allows(&self, value: &Scalar) -> bool {
        match self {
            Constraint::Range { min, max } => {
                let Some(v) = value.as_f64() else {
                    return false;
                };
                min.is_none_or(|lo| v >= lo) && max.is_none_or(|hi| v <= hi)
            }
            Constraint::OneOf { values } => values.iter().any(|allowed| allowed.matches(value)),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Range {
                min: Some(lo),
                max: Some(hi),
            } => write!(f, "between {lo} and {hi}"),
            Constraint::Range {
                min: Some(lo),
                max: None,
            } => write!(f, ">= {lo}"),
            Constraint::Range {
                min: None,
                max: Some(hi),
            } => write!(f, "<= {hi}"),
            Constraint::Range {
                min: None,
                max: None,
            } => write!(f, "any value"),
            Constraint::OneOf { values } => {
                let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "one of {{{}}}", rendered.join(", "))
            }
        }
    }
}

/// Rules for one declared column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Constraint>,
}

impl ColumnSpec {
    /// A non-nullable column with no value constraint.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: false,
            constraint: None,
        }
    }

    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    #[must_use]
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }
}

fn default_true() -> bool {
    true
}

/// Ordered column declarations plus table-level flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub columns: Vec<ColumnSpec>,
    /// Reject table columns that are not declared.
    #[serde(default = "default_true")]
    pub strict: bool,
    /// Convert values to the declared type before checking constraints.
    #[serde(default = "default_true")]
    pub coerce: bool,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            strict: true,
            coerce: true,
        }
    }
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn coerce(mut self, coerce: bool) -> Self {
        self.coerce = coerce;
        self
    }

    /// Look up a declared column by exact name.
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|spec| spec.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Declared column names in schema order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|spec| spec.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
