use mathspeak_core::constants::GENERAL_SUBJECT_AREA;
use mathspeak_core::models::{Expression, RuleContext};

/// Derive the per-run rule context from an expression's metadata.
pub fn build_context(expression: &Expression) -> RuleContext {
    RuleContext {
        expression_kind: expression.kind.unwrap_or_default(),
        subject_area: expression
            .subject_area
            .clone()
            .unwrap_or_else(|| GENERAL_SUBJECT_AREA.to_string()),
        audience_level: expression.audience_level.unwrap_or_default(),
        original_text: expression.raw_text.clone(),
        variables: expression.variables.clone(),
        complexity_score: expression.complexity.map_or(0.0, |c| c.score),
    }
}
