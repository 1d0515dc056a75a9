//! SpeechEngine: selection → bounded rewrite → post-processing, with failure
//! classification.

use std::sync::Arc;

use tracing::Instrument;

use mathspeak_core::config::{EngineConfig, MathspeakConfig};
use mathspeak_core::constants::TRANSFORMATION_LABEL_PREFIX;
use mathspeak_core::errors::{ConfigError, ProcessingError};
use mathspeak_core::models::{Expression, SpeechText};
use mathspeak_core::traits::{
    CancellationToken, IRuleStore, ProcessingCompletedEvent, ProcessingFailedEvent,
    ProcessingStartedEvent, RuleRef, SpeechEventHandler,
};

use crate::applier::{ApplierOutcome, ApplyError, PatternApplier};
use crate::context::build_context;
use crate::coverage::CoverageAnalyzer;
use crate::events::TracingEventHandler;
use crate::post_process::PostProcessor;
use crate::selector::PatternSelector;

/// Converts expressions to speech text using the rules of one store.
///
/// Requests are independent: the engine holds only read-only state, so one
/// instance can serve concurrent `process` calls.
pub struct SpeechEngine<S> {
    selector: PatternSelector<S>,
    applier: PatternApplier,
    post_processor: PostProcessor,
    config: EngineConfig,
    events: Arc<dyn SpeechEventHandler>,
}

impl<S: IRuleStore> SpeechEngine<S> {
    /// Create an engine. The config is validated and the phrase tables
    /// compiled up front.
    pub fn new(store: Arc<S>, config: &MathspeakConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            selector: PatternSelector::new(store),
            applier: PatternApplier::new(config.engine.max_iterations),
            post_processor: PostProcessor::new(&config.post_processing)?,
            config: config.engine.clone(),
            events: Arc::new(TracingEventHandler),
        })
    }

    /// Replace the event handler (defaults to `TracingEventHandler`).
    pub fn with_event_handler(mut self, events: Arc<dyn SpeechEventHandler>) -> Self {
        self.events = events;
        self
    }

    /// A coverage analyzer over the same rule store.
    pub fn coverage_analyzer(&self) -> CoverageAnalyzer<S> {
        CoverageAnalyzer::new(self.selector.clone())
    }

    /// Convert one expression.
    ///
    /// On success the applied rule ids are recorded on both the expression
    /// (`transformations`) and the returned `SpeechText`. On failure the
    /// expression is left untouched.
    pub async fn process(&self, expression: &mut Expression) -> Result<SpeechText, ProcessingError> {
        let span = tracing::info_span!(
            "mathspeak.process",
            expression_id = %expression.id,
            subject_area = %expression.subject_area_or_general(),
        );
        async {
            self.events.on_processing_started(&ProcessingStartedEvent {
                expression_id: expression.id.clone(),
                subject_area: expression.subject_area_or_general().to_string(),
            });

            let result = self.run(expression).await;
            match &result {
                Ok((speech, passes)) => {
                    self.events
                        .on_processing_completed(&ProcessingCompletedEvent {
                            expression_id: speech.expression_id.clone(),
                            passes: *passes,
                            applied_rules: speech.applied_rules.clone(),
                        });
                }
                Err(error) => {
                    self.events
                        .on_processing_failed(&ProcessingFailedEvent::from_error(error));
                }
            }
            result.map(|(speech, _)| speech)
        }
        .instrument(span)
        .await
    }

    async fn run(&self, expression: &mut Expression) -> Result<(SpeechText, usize), ProcessingError> {
        let rules = self
            .selector
            .select(expression)
            .await
            .map_err(|e| ProcessingError::unexpected(&expression.id, e))?;
        if rules.is_empty() {
            return Err(ProcessingError::NoPatternsFound {
                expression_id: expression.id.clone(),
                subject_area: expression.subject_area_or_general().to_string(),
            });
        }

        let outcome = self.apply_within_budget(expression, &rules).await?;

        for rule_id in &outcome.applied_rules {
            expression
                .transformations
                .push(format!("{TRANSFORMATION_LABEL_PREFIX}{rule_id}"));
        }
        let text = self.post_processor.process(&outcome.text, expression);
        let mut speech = SpeechText::new(expression.id.clone(), text);
        for rule_id in outcome.applied_rules {
            speech.record_rule(rule_id);
        }
        Ok((speech, outcome.passes))
    }

    /// Run the applier under the configured time budget. Both the deadline
    /// token (checked between rule applications) and the runtime timeout
    /// (checked at yield points) report as `Timeout`.
    async fn apply_within_budget(
        &self,
        expression: &Expression,
        rules: &[RuleRef],
    ) -> Result<ApplierOutcome, ProcessingError> {
        let context = build_context(expression);
        let budget = self.config.timeout();
        let token = CancellationToken::with_budget(budget);
        let span = tracing::debug_span!("mathspeak.apply", rules = rules.len());

        let applied = tokio::time::timeout(
            budget,
            self.applier
                .apply(expression, rules, &context, &token, self.events.as_ref())
                .instrument(span),
        )
        .await;

        match applied {
            Ok(Ok(outcome)) => Ok(outcome),
            Ok(Err(ApplyError::Cancelled)) | Err(_) => Err(ProcessingError::Timeout {
                expression_id: expression.id.clone(),
                timeout_seconds: self.config.timeout_seconds,
            }),
            Ok(Err(ApplyError::Rule(e))) => Err(ProcessingError::unexpected(&expression.id, e)),
        }
    }
}
