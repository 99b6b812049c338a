use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Options for dataset evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateOptions {
    pub min_wells: u32,
    pub max_wells: u32,
    /// Date the inspection window is measured from. Unchecked when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
    /// Limit the number of examples emitted in the report.
    pub max_examples: usize,
}

impl Default for EvaluateOptions {
    fn default() -> Self {
        Self {
            min_wells: 5,
            max_wells: 8,
            reference_date: None,
            max_examples: 20,
        }
    }
}

/// Structured violation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub code: String,
    /// `district/id` of the offending record, or the district alone for
    /// per-district checks.
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_index: Option<u64>,
}

/// Result of a dataset evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub wells_checked: u64,
    pub districts_seen: u64,
    pub violations_by_code: BTreeMap<String, u64>,
    pub violations: Vec<Violation>,
}

impl EvaluationReport {
    pub fn record(&mut self, violation: Violation) {
        *self
            .violations_by_code
            .entry(violation.code.clone())
            .or_insert(0) += 1;
        self.violations.push(violation);
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.violations_by_code.contains_key(code)
    }
}
