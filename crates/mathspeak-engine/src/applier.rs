//! Bounded, priority-ordered fixed-point rewriting.

use rustc_hash::FxHashSet;

use mathspeak_core::errors::RuleError;
use mathspeak_core::models::{Expression, RuleContext};
use mathspeak_core::traits::{
    Cancellable, PassCompletedEvent, RuleAppliedEvent, RuleRef, SpeechEventHandler,
};

/// Why a rewrite run stopped without a result.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error("rewrite cancelled")]
    Cancelled,

    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Result of a completed rewrite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplierOutcome {
    pub text: String,
    /// Ids of the rules that fired, in firing order. No id repeats.
    pub applied_rules: Vec<String>,
    /// Passes executed, including a final pass that found nothing to apply.
    pub passes: usize,
}

/// Runs up to `max_iterations` passes over the rule list. Each pass tries
/// every rule that has not fired yet, in priority order, against the current
/// text. A rule fires at most once per run; the loop ends at the first pass
/// where nothing fires or once every rule has fired.
#[derive(Debug, Clone, Copy)]
pub struct PatternApplier {
    max_iterations: usize,
}

impl PatternApplier {
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }

    /// Rewrite `expression.raw_text` with `rules`.
    ///
    /// `token` is checked before every rule application; once it reports
    /// cancelled the run stops and everything rewritten so far is dropped.
    /// The task yields to the runtime between passes so an outer timeout can
    /// fire.
    pub async fn apply(
        &self,
        expression: &Expression,
        rules: &[RuleRef],
        context: &RuleContext,
        token: &impl Cancellable,
        events: &dyn SpeechEventHandler,
    ) -> Result<ApplierOutcome, ApplyError> {
        let mut text = expression.raw_text.clone();
        let mut applied_ids: FxHashSet<&str> = FxHashSet::default();
        let mut applied_rules = Vec::new();
        let mut pass = 0;

        while pass < self.max_iterations {
            pass += 1;
            let mut fired = 0usize;

            for rule in rules {
                if applied_ids.contains(rule.id()) {
                    continue;
                }
                if token.is_cancelled() {
                    return Err(ApplyError::Cancelled);
                }
                let rewrite = rule.apply(&text, context)?;
                if !rewrite.applied {
                    continue;
                }
                text = rewrite.text;
                applied_ids.insert(rule.id());
                applied_rules.push(rule.id().to_string());
                fired += 1;
                tracing::trace!(rule_id = %rule.id(), pass, "rule applied");
                events.on_rule_applied(&RuleAppliedEvent {
                    expression_id: expression.id.clone(),
                    rule_id: rule.id().to_string(),
                    pass,
                });
            }

            events.on_pass_completed(&PassCompletedEvent {
                expression_id: expression.id.clone(),
                pass,
                rules_applied: fired,
            });

            if fired == 0 || applied_ids.len() == rules.len() {
                break;
            }
            tokio::task::yield_now().await;
        }

        Ok(ApplierOutcome {
            text,
            applied_rules,
            passes: pass,
        })
    }
}
