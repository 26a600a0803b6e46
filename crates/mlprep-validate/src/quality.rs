//! Advisory data quality checks on a raw table.
//!
//! These never fail a run. They flag an empty table and columns holding
//! missing values so the problem is visible before schema validation.

use std::fmt;

use polars::prelude::DataFrame;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QualityIssue {
    EmptyTable,
    MissingValues { columns: Vec<String> },
}

impl fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityIssue::EmptyTable => write!(f, "table is empty"),
            QualityIssue::MissingValues { columns } => {
                write!(f, "contains missing values in: {}", columns.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualityReport {
    pub issues: Vec<QualityIssue>,
}

impl QualityReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

pub fn check_quality(df: &DataFrame) -> QualityReport {
    let mut issues = Vec::new();

    if df.height() == 0 {
        issues.push(QualityIssue::EmptyTable);
    }

    let columns: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|column| column.null_count() > 0)
        .map(|column| column.name().to_string())
        .collect();
    if !columns.is_empty() {
        issues.push(QualityIssue::MissingValues { columns });
    }

    QualityReport { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    #[test]
    fn clean_table() {
        let df = DataFrame::new(vec![Series::new("age".into(), vec![25i64, 40]).into()]).unwrap();
        assert!(check_quality(&df).is_clean());
    }

    #[test]
    fn flags_empty_and_missing() {
        let empty =
            DataFrame::new(vec![Series::new("age".into(), Vec::<i64>::new()).into()]).unwrap();
        assert_eq!(check_quality(&empty).issues, vec![QualityIssue::EmptyTable]);

        let df = DataFrame::new(vec![
            Series::new("age".into(), vec![Some(25i64), None]).into(),
            Series::new("income".into(), vec![1.0f64, 2.0]).into(),
        ])
        .unwrap();
        let report = check_quality(&df);
        assert_eq!(
            report.messages(),
            vec!["contains missing values in: age".to_string()]
        );
    }
}
