//! Cell coercion to declared column types.
//!
//! Integer columns accept integers, floats with no fractional part, booleans
//! and text that parses as either. Float columns accept any finite number or
//! numeric text. Categorical columns accept anything and keep its text form.
//! Null cells and blank text stay null; NaN floats count as null.

use mlprep_ingest::{any_to_string, is_missing_value};
use mlprep_model::{ColumnType, Scalar};
use polars::prelude::{AnyValue, DataType};

/// Outcome of coercing one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    Null,
    Value(Scalar),
    Invalid,
}

pub fn coerce_value(value: &AnyValue<'_>, column_type: ColumnType) -> Coerced {
    if is_missing_value(value) {
        return Coerced::Null;
    }
    match column_type {
        ColumnType::Integer => to_integer(value),
        ColumnType::Float => to_float(value),
        ColumnType::Categorical => {
            Coerced::Value(Scalar::Text(any_to_string(value.clone()).trim().to_string()))
        }
    }
}

/// Whether a column dtype already holds the declared type, for schemas that
/// do not coerce. An all-null column fits any type.
pub fn dtype_matches(dtype: &DataType, column_type: ColumnType) -> bool {
    if matches!(dtype, DataType::Null) {
        return true;
    }
    match column_type {
        ColumnType::Integer => dtype.is_integer(),
        ColumnType::Float => dtype.is_float(),
        ColumnType::Categorical => matches!(dtype, DataType::String),
    }
}

fn to_integer(value: &AnyValue<'_>) -> Coerced {
    let int = |v: i64| Coerced::Value(Scalar::Int(v));
    match value {
        AnyValue::Boolean(v) => int(i64::from(*v)),
        AnyValue::Int8(v) => int(i64::from(*v)),
        AnyValue::Int16(v) => int(i64::from(*v)),
        AnyValue::Int32(v) => int(i64::from(*v)),
        AnyValue::Int64(v) => int(*v),
        AnyValue::UInt8(v) => int(i64::from(*v)),
        AnyValue::UInt16(v) => int(i64::from(*v)),
        AnyValue::UInt32(v) => int(i64::from(*v)),
        AnyValue::UInt64(v) => i64::try_from(*v).map_or(Coerced::Invalid, int),
        AnyValue::Float32(v) => integral_float(f64::from(*v)),
        AnyValue::Float64(v) => integral_float(*v),
        AnyValue::String(s) => parse_integer(s),
        AnyValue::StringOwned(s) => parse_integer(s.as_str()),
        _ => Coerced::Invalid,
    }
}

fn to_float(value: &AnyValue<'_>) -> Coerced {
    let float = |v: f64| Coerced::Value(Scalar::Float(v));
    match value {
        AnyValue::Boolean(v) => float(if *v { 1.0 } else { 0.0 }),
        AnyValue::Int8(v) => float(f64::from(*v)),
        AnyValue::Int16(v) => float(f64::from(*v)),
        AnyValue::Int32(v) => float(f64::from(*v)),
        AnyValue::Int64(v) => float(*v as f64),
        AnyValue::UInt8(v) => float(f64::from(*v)),
        AnyValue::UInt16(v) => float(f64::from(*v)),
        AnyValue::UInt32(v) => float(f64::from(*v)),
        AnyValue::UInt64(v) => float(*v as f64),
        AnyValue::Float32(v) => native_float(f64::from(*v)),
        AnyValue::Float64(v) => native_float(*v),
        AnyValue::String(s) => parse_float(s),
        AnyValue::StringOwned(s) => parse_float(s.as_str()),
        _ => Coerced::Invalid,
    }
}

fn native_float(v: f64) -> Coerced {
    if v.is_nan() {
        Coerced::Null
    } else if v.is_infinite() {
        Coerced::Invalid
    } else {
        Coerced::Value(Scalar::Float(v))
    }
}

fn integral_float(v: f64) -> Coerced {
    if v.is_nan() {
        return Coerced::Null;
    }
    // i64::MAX is not representable as f64; the exclusive upper bound keeps
    // the cast lossless.
    if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Coerced::Value(Scalar::Int(v as i64))
    } else {
        Coerced::Invalid
    }
}

fn parse_integer(text: &str) -> Coerced {
    let trimmed = text.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Coerced::Value(Scalar::Int(v));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => integral_float(v),
        _ => Coerced::Invalid,
    }
}

fn parse_float(text: &str) -> Coerced {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Coerced::Value(Scalar::Float(v)),
        _ => Coerced::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> Coerced {
        Coerced::Value(Scalar::Int(v))
    }

    fn float(v: f64) -> Coerced {
        Coerced::Value(Scalar::Float(v))
    }

    #[test]
    fn integer_from_text() {
        assert_eq!(coerce_value(&AnyValue::String("25"), ColumnType::Integer), int(25));
        assert_eq!(coerce_value(&AnyValue::String(" 25 "), ColumnType::Integer), int(25));
        assert_eq!(coerce_value(&AnyValue::String("25.0"), ColumnType::Integer), int(25));
        assert_eq!(
            coerce_value(&AnyValue::String("25.5"), ColumnType::Integer),
            Coerced::Invalid
        );
        assert_eq!(
            coerce_value(&AnyValue::String("abc"), ColumnType::Integer),
            Coerced::Invalid
        );
        assert_eq!(
            coerce_value(&AnyValue::String("nan"), ColumnType::Integer),
            Coerced::Invalid
        );
    }

    #[test]
    fn integer_from_native_values() {
        assert_eq!(coerce_value(&AnyValue::Int32(7), ColumnType::Integer), int(7));
        assert_eq!(coerce_value(&AnyValue::Float64(3.0), ColumnType::Integer), int(3));
        assert_eq!(
            coerce_value(&AnyValue::Float64(3.5), ColumnType::Integer),
            Coerced::Invalid
        );
        assert_eq!(coerce_value(&AnyValue::Boolean(true), ColumnType::Integer), int(1));
        assert_eq!(
            coerce_value(&AnyValue::UInt64(u64::MAX), ColumnType::Integer),
            Coerced::Invalid
        );
    }

    #[test]
    fn float_from_text_and_ints() {
        assert_eq!(coerce_value(&AnyValue::String("9"), ColumnType::Float), float(9.0));
        assert_eq!(coerce_value(&AnyValue::String("1e3"), ColumnType::Float), float(1000.0));
        assert_eq!(coerce_value(&AnyValue::Int64(50_000), ColumnType::Float), float(50_000.0));
        assert_eq!(
            coerce_value(&AnyValue::String("inf"), ColumnType::Float),
            Coerced::Invalid
        );
        assert_eq!(
            coerce_value(&AnyValue::Float64(f64::INFINITY), ColumnType::Float),
            Coerced::Invalid
        );
    }

    #[test]
    fn missing_cells_stay_null() {
        assert_eq!(coerce_value(&AnyValue::Null, ColumnType::Integer), Coerced::Null);
        assert_eq!(coerce_value(&AnyValue::String("  "), ColumnType::Float), Coerced::Null);
        assert_eq!(coerce_value(&AnyValue::Float64(f64::NAN), ColumnType::Float), Coerced::Null);
    }

    #[test]
    fn categorical_keeps_text() {
        assert_eq!(
            coerce_value(&AnyValue::Int64(3), ColumnType::Categorical),
            Coerced::Value(Scalar::from("3"))
        );
    }

    #[test]
    fn dtype_families() {
        assert!(dtype_matches(&DataType::Int32, ColumnType::Integer));
        assert!(!dtype_matches(&DataType::Float64, ColumnType::Integer));
        assert!(dtype_matches(&DataType::Float32, ColumnType::Float));
        assert!(!dtype_matches(&DataType::String, ColumnType::Float));
        assert!(dtype_matches(&DataType::String, ColumnType::Categorical));
        assert!(dtype_matches(&DataType::Null, ColumnType::Integer));
    }
}
