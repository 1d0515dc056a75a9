//! Textual normalization of the rewritten string. Never re-runs rule matching.

use regex::{Captures, Regex};

use mathspeak_core::config::{PhraseSubstitution, PostProcessingConfig};
use mathspeak_core::errors::ConfigError;
use mathspeak_core::models::{ComplexityLevel, Expression};

const PUNCTUATION_FIXES: [(&str, &str); 4] = [(" .", "."), (" ,", ","), (" ;", ";"), (" :", ":")];

/// A compiled phrase substitution.
///
/// Spaces at either end of the phrase are context: they must be present
/// around the match but are not consumed, so adjacent occurrences
/// (`" dot dot "`) are all replaced in one pass. Word characters at either
/// end are anchored on word boundaries, so `natural log` does not match
/// inside `natural logarithm`.
#[derive(Debug, Clone)]
struct PhraseRule {
    regex: Regex,
    replacement: String,
    space_before: bool,
    space_after: bool,
}

impl PhraseRule {
    fn compile(field: &str, sub: &PhraseSubstitution) -> Result<Self, ConfigError> {
        let core = sub.from.trim_matches(' ');
        if core.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: field.to_string(),
                message: format!("phrase {:?} has no words", sub.from),
            });
        }
        let space_before = sub.from.starts_with(' ');
        let space_after = sub.from.ends_with(' ');

        let mut pattern = String::new();
        if core.chars().next().is_some_and(is_word_char) {
            pattern.push_str(r"\b");
        }
        pattern.push_str(&regex::escape(core));
        if core.chars().last().is_some_and(is_word_char) {
            pattern.push_str(r"\b");
        }
        let regex = Regex::new(&pattern).map_err(|e| ConfigError::ValidationFailed {
            field: field.to_string(),
            message: e.to_string(),
        })?;

        let mut replacement = sub.to.as_str();
        if space_before {
            replacement = replacement.strip_prefix(' ').unwrap_or(replacement);
        }
        if space_after {
            replacement = replacement.strip_suffix(' ').unwrap_or(replacement);
        }

        Ok(Self {
            regex,
            replacement: replacement.to_string(),
            space_before,
            space_after,
        })
    }

    fn apply(&self, text: &str) -> String {
        self.regex
            .replace_all(text, |caps: &Captures<'_>| {
                let whole = caps.get(0).map_or((0, 0, ""), |m| (m.start(), m.end(), m.as_str()));
                let (start, end, matched) = whole;
                let before_ok = !self.space_before || text[..start].ends_with(' ');
                let after_ok = !self.space_after || text[end..].starts_with(' ');
                if before_ok && after_ok {
                    self.replacement.clone()
                } else {
                    matched.to_string()
                }
            })
            .into_owned()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn compile_table(field: &str, table: &[PhraseSubstitution]) -> Result<Vec<PhraseRule>, ConfigError> {
    table.iter().map(|sub| PhraseRule::compile(field, sub)).collect()
}

/// Normalizes whitespace and punctuation and applies the phrase table that
/// matches the expression's complexity classification.
#[derive(Debug, Clone)]
pub struct PostProcessor {
    basic: Vec<PhraseRule>,
    advanced: Vec<PhraseRule>,
}

impl PostProcessor {
    pub fn new(config: &PostProcessingConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            basic: compile_table("post_processing.basic_phrases", &config.basic_phrases)?,
            advanced: compile_table("post_processing.advanced_phrases", &config.advanced_phrases)?,
        })
    }

    /// Steps, in order: collapse whitespace, phrase table, capitalize,
    /// punctuation spacing, trim.
    pub fn process(&self, text: &str, expression: &Expression) -> String {
        let mut out = collapse_whitespace(text);

        let table: &[PhraseRule] = match expression.complexity_level() {
            Some(ComplexityLevel::Basic) => &self.basic,
            Some(ComplexityLevel::Advanced) => &self.advanced,
            Some(ComplexityLevel::Intermediate) | None => &[],
        };
        for phrase in table {
            out = phrase.apply(&out);
        }

        out = capitalize_first(&out);
        for (from, to) in PUNCTUATION_FIXES {
            out = out.replace(from, to);
        }
        out.trim().to_string()
    }
}

/// Replace every whitespace run with a single space.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// Uppercase the first non-space character unless it already is uppercase.
/// Characters without case (digits, symbols) are left as they are.
fn capitalize_first(text: &str) -> String {
    let Some((idx, first)) = text.char_indices().find(|(_, c)| !c.is_whitespace()) else {
        return text.to_string();
    };
    if first.is_uppercase() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 2);
    out.push_str(&text[..idx]);
    out.extend(first.to_uppercase());
    out.push_str(&text[idx + first.len_utf8()..]);
    out
}

#[cfg(test)]
mod tests {
    use mathspeak_core::models::ComplexityMetrics;

    use super::*;

    fn processor() -> PostProcessor {
        PostProcessor::new(&PostProcessingConfig::default()).unwrap()
    }

    fn basic() -> Expression {
        Expression::new("").with_complexity(ComplexityMetrics::from_score(0.1))
    }

    fn advanced() -> Expression {
        Expression::new("").with_complexity(ComplexityMetrics::from_score(0.9))
    }

    fn intermediate() -> Expression {
        Expression::new("").with_complexity(ComplexityMetrics::from_score(0.5))
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(collapse_whitespace("a \t\n b  c"), "a b c");
        assert_eq!(collapse_whitespace("  a  "), " a ");
    }

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalize_first("the sum"), "The sum");
        assert_eq!(capitalize_first(" x"), " X");
        assert_eq!(capitalize_first("Already"), "Already");
        assert_eq!(capitalize_first("(a)"), "(a)");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn basic_table_only_for_basic_expressions() {
        let pp = processor();
        let text = "the derivative with respect to x such that y implies z";
        assert_eq!(
            pp.process(text, &basic()),
            "The derivative by x where y means z"
        );
        assert_eq!(
            pp.process(text, &advanced()),
            "The derivative with respect to x such that y implies z"
        );
        assert_eq!(
            pp.process(text, &intermediate()),
            "The derivative with respect to x such that y implies z"
        );
        assert_eq!(
            pp.process(text, &Expression::new("")),
            "The derivative with respect to x such that y implies z"
        );
    }

    #[test]
    fn advanced_table_only_for_advanced_expressions() {
        let pp = processor();
        let text = "u dot v over the natural log of x";
        assert_eq!(
            pp.process(text, &advanced()),
            "U inner product v over the natural logarithm of x"
        );
        assert_eq!(pp.process(text, &basic()), "U dot v over the natural log of x");
    }

    #[test]
    fn if_and_only_if_becomes_exactly_when() {
        let pp = processor();
        assert_eq!(
            pp.process("p if and only if q", &basic()),
            "P exactly when q"
        );
    }

    #[test]
    fn adjacent_spaced_phrases_all_replaced() {
        let pp = processor();
        assert_eq!(
            pp.process("a dot dot b", &advanced()),
            "A inner product inner product b"
        );
    }

    #[test]
    fn phrases_respect_word_boundaries() {
        let pp = processor();
        assert_eq!(
            pp.process("the natural logarithm", &advanced()),
            "The natural logarithm"
        );
        assert_eq!(pp.process("dotted  line", &advanced()), "Dotted line");
    }

    #[test]
    fn fixes_space_before_punctuation() {
        let pp = processor();
        assert_eq!(
            pp.process("  first , second ; third : fourth .  ", &Expression::new("")),
            "First, second; third: fourth."
        );
    }

    #[test]
    fn empty_phrase_is_rejected() {
        let config = PostProcessingConfig {
            basic_phrases: vec![PhraseSubstitution::new("   ", "x")],
            advanced_phrases: Vec::new(),
        };
        assert!(PostProcessor::new(&config).is_err());
    }
}
