use std::fmt;

use serde::Serialize;

use crate::issue::Violation;

/// Every violation found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        self.violations.extend(violations);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Violation counts per column, in order of first appearance.
    pub fn counts_by_column(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for violation in &self.violations {
            match counts
                .iter_mut()
                .find(|(column, _)| *column == violation.column)
            {
                Some((_, count)) => *count += 1,
                None => counts.push((violation.column.as_str(), 1)),
            }
        }
        counts
    }

    /// Columns named by any violation, deduplicated.
    pub fn columns(&self) -> Vec<&str> {
        self.counts_by_column()
            .into_iter()
            .map(|(column, _)| column)
            .collect()
    }

    /// One-line summary, e.g. `3 violation(s): age (2), target (1)`.
    pub fn summary(&self) -> String {
        let parts: Vec<String> = self
            .counts_by_column()
            .into_iter()
            .map(|(column, count)| format!("{column} ({count})"))
            .collect();
        format!("{} violation(s): {}", self.len(), parts.join(", "))
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())?;
        for violation in &self.violations {
            write!(f, "\n- {violation}")?;
        }
        Ok(())
    }
}
