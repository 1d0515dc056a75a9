//! Default event handler: forwards engine events to `tracing`.

use mathspeak_core::traits::{
    PassCompletedEvent, ProcessingCompletedEvent, ProcessingFailedEvent, ProcessingStartedEvent,
    RuleAppliedEvent, SpeechEventHandler,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventHandler;

impl SpeechEventHandler for TracingEventHandler {
    fn on_processing_started(&self, event: &ProcessingStartedEvent) {
        tracing::debug!(
            expression_id = %event.expression_id,
            subject_area = %event.subject_area,
            "processing started"
        );
    }

    fn on_rule_applied(&self, event: &RuleAppliedEvent) {
        tracing::debug!(
            expression_id = %event.expression_id,
            rule_id = %event.rule_id,
            pass = event.pass,
            "rule applied"
        );
    }

    fn on_pass_completed(&self, event: &PassCompletedEvent) {
        tracing::trace!(
            expression_id = %event.expression_id,
            pass = event.pass,
            rules_applied = event.rules_applied,
            "pass completed"
        );
    }

    fn on_processing_completed(&self, event: &ProcessingCompletedEvent) {
        tracing::info!(
            expression_id = %event.expression_id,
            passes = event.passes,
            applied = event.applied_rules.len(),
            "processing completed"
        );
    }

    fn on_processing_failed(&self, event: &ProcessingFailedEvent) {
        tracing::warn!(
            expression_id = %event.expression_id,
            stage = %event.stage,
            code = event.error_code,
            error = %event.message,
            "processing failed"
        );
    }
}
