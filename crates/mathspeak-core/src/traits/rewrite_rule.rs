use std::fmt;
use std::sync::Arc;

use crate::errors::RuleError;
use crate::models::RuleContext;

/// Shared handle to an immutable rule.
pub type RuleRef = Arc<dyn IRewriteRule>;

/// Outcome of one `apply` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    /// Whether the rule matched. The text is unchanged when false.
    pub applied: bool,
}

impl Rewrite {
    pub fn applied(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            applied: true,
        }
    }

    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            applied: false,
        }
    }
}

/// A rewrite rule. Loaded once, read-only for the lifetime of the store,
/// and shared across concurrent requests.
pub trait IRewriteRule: Send + Sync + fmt::Debug {
    /// Unique identifier within a subject-area namespace.
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    /// Higher priorities are tried first.
    fn priority(&self) -> i32;

    fn subject_areas(&self) -> &[String];

    fn tags(&self) -> &[String] {
        &[]
    }

    fn naturalness_score(&self) -> i32 {
        0
    }

    /// Test whether the rule would fire on `text`.
    fn matches(&self, text: &str) -> bool;

    /// Byte spans of every non-overlapping match in `text`.
    fn match_positions(&self, _text: &str) -> Vec<(usize, usize)> {
        Vec::new()
    }

    /// Rewrite `text`. Errors abort the whole processing run.
    fn apply(&self, text: &str, context: &RuleContext) -> Result<Rewrite, RuleError>;
}
