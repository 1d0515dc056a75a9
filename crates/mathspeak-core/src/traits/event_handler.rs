//! SpeechEventHandler: the observability port of the engine.
//!
//! The engine holds an injected handler instead of logging through a global,
//! so tests can observe a run and concurrent engines stay independent.

use crate::errors::{ProcessingError, ProcessingStage};

#[derive(Debug, Clone)]
pub struct ProcessingStartedEvent {
    pub expression_id: String,
    pub subject_area: String,
}

#[derive(Debug, Clone)]
pub struct RuleAppliedEvent {
    pub expression_id: String,
    pub rule_id: String,
    pub pass: usize,
}

#[derive(Debug, Clone)]
pub struct PassCompletedEvent {
    pub expression_id: String,
    pub pass: usize,
    pub rules_applied: usize,
}

#[derive(Debug, Clone)]
pub struct ProcessingCompletedEvent {
    pub expression_id: String,
    pub passes: usize,
    pub applied_rules: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProcessingFailedEvent {
    pub expression_id: String,
    pub stage: ProcessingStage,
    pub error_code: &'static str,
    pub message: String,
}

impl ProcessingFailedEvent {
    pub fn from_error(error: &ProcessingError) -> Self {
        use crate::errors::ErrorCode;
        Self {
            expression_id: error.expression_id().to_string(),
            stage: error.stage(),
            error_code: error.error_code(),
            message: error.to_string(),
        }
    }
}

/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about.
pub trait SpeechEventHandler: Send + Sync {
    fn on_processing_started(&self, _event: &ProcessingStartedEvent) {}
    fn on_rule_applied(&self, _event: &RuleAppliedEvent) {}
    fn on_pass_completed(&self, _event: &PassCompletedEvent) {}
    fn on_processing_completed(&self, _event: &ProcessingCompletedEvent) {}
    fn on_processing_failed(&self, _event: &ProcessingFailedEvent) {}
}

/// Handler that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventHandler;

impl SpeechEventHandler for NoopEventHandler {}
