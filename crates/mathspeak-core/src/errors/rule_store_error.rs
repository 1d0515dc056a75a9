//! Rule store and rule loading errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while loading rule definitions or querying a store.
#[derive(Debug, thiserror::Error)]
pub enum RuleStoreError {
    #[error("failed to read rule file {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("rule file parse error in {source_name}: {message}")]
    ParseFailed {
        source_name: String,
        message: String,
    },

    #[error("invalid rule '{rule_id}': {reason}")]
    InvalidRule { rule_id: String, reason: String },

    #[error("duplicate rule '{rule_id}' in subject area '{subject_area}'")]
    DuplicateRule {
        rule_id: String,
        subject_area: String,
    },

    #[error("rule store unavailable: {reason}")]
    Unavailable { reason: String },
}

impl ErrorCode for RuleStoreError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_STORE_ERROR
    }
}
