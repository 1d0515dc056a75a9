//! Top-level failures reported for one expression-processing request.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error_code::{self, ErrorCode};

/// Stage of the pipeline a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStage {
    Selection,
    Application,
}

impl ProcessingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Application => "application",
        }
    }
}

impl fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three ways a processing request can fail. A caller observes exactly
/// one of these or a successful result, never a partial result.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("no patterns found for expression {expression_id} in subject area '{subject_area}'")]
    NoPatternsFound {
        expression_id: String,
        subject_area: String,
    },

    #[error("pattern application for expression {expression_id} timed out after {timeout_seconds} seconds")]
    Timeout {
        expression_id: String,
        timeout_seconds: f64,
    },

    #[error("unexpected failure processing expression {expression_id}: {message}")]
    UnexpectedFailure {
        expression_id: String,
        message: String,
    },
}

impl ProcessingError {
    /// Re-report any lower-level failure under `UnexpectedFailure`, keeping
    /// its message.
    pub fn unexpected(expression_id: impl Into<String>, source: impl fmt::Display) -> Self {
        Self::UnexpectedFailure {
            expression_id: expression_id.into(),
            message: source.to_string(),
        }
    }

    pub fn stage(&self) -> ProcessingStage {
        match self {
            Self::NoPatternsFound { .. } => ProcessingStage::Selection,
            Self::Timeout { .. } | Self::UnexpectedFailure { .. } => ProcessingStage::Application,
        }
    }

    pub fn expression_id(&self) -> &str {
        match self {
            Self::NoPatternsFound { expression_id, .. }
            | Self::Timeout { expression_id, .. }
            | Self::UnexpectedFailure { expression_id, .. } => expression_id,
        }
    }
}

impl ErrorCode for ProcessingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoPatternsFound { .. } => error_code::NO_PATTERNS_FOUND,
            Self::Timeout { .. } => error_code::TIMEOUT,
            Self::UnexpectedFailure { .. } => error_code::UNEXPECTED_FAILURE,
        }
    }
}
