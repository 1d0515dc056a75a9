use serde::{Deserialize, Serialize};

use super::defaults;

/// One phrase replacement, applied after whitespace collapsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseSubstitution {
    pub from: String,
    pub to: String,
}

impl PhraseSubstitution {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Complexity-conditional phrase tables. Exactly one table runs per
/// expression, chosen by its complexity classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostProcessingConfig {
    pub basic_phrases: Vec<PhraseSubstitution>,
    pub advanced_phrases: Vec<PhraseSubstitution>,
}

fn table(pairs: &[(&str, &str)]) -> Vec<PhraseSubstitution> {
    pairs
        .iter()
        .map(|(from, to)| PhraseSubstitution::new(*from, *to))
        .collect()
}

impl Default for PostProcessingConfig {
    fn default() -> Self {
        Self {
            basic_phrases: table(defaults::DEFAULT_BASIC_PHRASES),
            advanced_phrases: table(defaults::DEFAULT_ADVANCED_PHRASES),
        }
    }
}
