//! Errors raised by an individual rule while matching or rewriting.

use super::error_code::{self, ErrorCode};

/// Failure inside a single rule's `apply` call.
///
/// The applier never recovers from these per rule: one failing rule aborts
/// the whole run.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("rule '{rule_id}' failed to apply: {reason}")]
    ApplicationFailed { rule_id: String, reason: String },
}

impl ErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_ERROR
    }
}
