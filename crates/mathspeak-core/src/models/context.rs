use serde::{Deserialize, Serialize};

use super::expression::{AudienceLevel, ExpressionKind};

/// Attributes derived from an expression once per processing run and handed
/// unchanged to every rule's `apply` call.
///
/// The context is not refreshed as the text is rewritten; rules see the
/// intermediate text only through the explicit `text` argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleContext {
    pub expression_kind: ExpressionKind,
    pub subject_area: String,
    pub audience_level: AudienceLevel,
    /// The expression's raw text before any rewriting.
    pub original_text: String,
    pub variables: Vec<String>,
    pub complexity_score: f64,
}
