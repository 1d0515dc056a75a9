use serde::{Deserialize, Serialize};

/// Final output of a successful processing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechText {
    pub expression_id: String,
    pub text: String,
    /// Rule ids in the order they fired.
    pub applied_rules: Vec<String>,
}

impl SpeechText {
    pub fn new(expression_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            expression_id: expression_id.into(),
            text: text.into(),
            applied_rules: Vec::new(),
        }
    }

    pub fn record_rule(&mut self, rule_id: impl Into<String>) {
        self.applied_rules.push(rule_id.into());
    }
}
