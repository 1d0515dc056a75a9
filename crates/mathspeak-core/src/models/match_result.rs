use crate::traits::RuleRef;

/// Confidence assigned to a match when the rule reports none.
pub const DEFAULT_MATCH_CONFIDENCE: f64 = 1.0;

/// Transient outcome of testing one rule against one text.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub rule: RuleRef,
    pub matched: bool,
    pub transformed_text: Option<String>,
    /// Byte `(start, end)` spans of every non-overlapping match.
    pub positions: Vec<(usize, usize)>,
    pub confidence: f64,
}

impl MatchResult {
    pub fn new(rule: RuleRef, matched: bool) -> Self {
        Self {
            rule,
            matched,
            transformed_text: None,
            positions: Vec::new(),
            confidence: DEFAULT_MATCH_CONFIDENCE,
        }
    }

    /// Test `rule` against `text` without rewriting it.
    pub fn probe(rule: &RuleRef, text: &str) -> Self {
        let mut result = Self::new(rule.clone(), rule.matches(text));
        if result.matched {
            result.positions = rule.match_positions(text);
        }
        result
    }

    pub fn rule_id(&self) -> &str {
        self.rule.id()
    }
}
