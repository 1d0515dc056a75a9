use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Pattern coverage over a batch of expressions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub total_expressions: usize,
    pub matched_expressions: usize,
    /// Every non-matching expression, including those beyond the sample cap.
    pub unmatched_expressions: usize,
    /// `matched / total * 100`, 0 for an empty batch.
    pub coverage_percentage: f64,
    /// Rule id → number of expressions it matched.
    pub pattern_usage: BTreeMap<String, usize>,
    /// Truncated raw text of the first unmatched expressions.
    pub unmatched_samples: Vec<String>,
}

impl CoverageReport {
    pub fn percentage(matched: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            matched as f64 / total as f64 * 100.0
        }
    }

    /// Usage count for one rule, 0 if it never matched.
    pub fn usage(&self, rule_id: &str) -> usize {
        self.pattern_usage.get(rule_id).copied().unwrap_or(0)
    }
}
