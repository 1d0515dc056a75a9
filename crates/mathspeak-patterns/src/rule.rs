//! `TemplateRule`: a compiled regex plus backreference template.

use std::collections::BTreeMap;

use regex::{Captures, Regex};

use mathspeak_core::constants::GENERAL_SUBJECT_AREA;
use mathspeak_core::errors::{RuleError, RuleStoreError};
use mathspeak_core::models::{AudienceLevel, RuleContext, RuleDefinition};
use mathspeak_core::traits::{IRewriteRule, Rewrite};

use crate::template::Template;

/// A rule compiled from a `RuleDefinition`.
///
/// `apply` replaces every non-overlapping match of the pattern with the
/// template chosen for the context's audience level.
#[derive(Debug, Clone)]
pub struct TemplateRule {
    id: String,
    name: String,
    description: Option<String>,
    regex: Regex,
    template: Template,
    audience_templates: BTreeMap<AudienceLevel, Template>,
    priority: i32,
    tags: Vec<String>,
    naturalness_score: i32,
    subject_areas: Vec<String>,
}

impl TemplateRule {
    /// Compile a definition. Fails on an empty id, an invalid regex, an
    /// unknown audience level, or a template referencing a group the pattern
    /// does not define.
    pub fn compile(def: RuleDefinition) -> Result<Self, RuleStoreError> {
        if def.id.trim().is_empty() {
            return Err(RuleStoreError::InvalidRule {
                rule_id: def.id,
                reason: "rule id must not be empty".to_string(),
            });
        }

        let regex = Regex::new(&def.pattern).map_err(|e| RuleStoreError::InvalidRule {
            rule_id: def.id.clone(),
            reason: format!("regex error: {e}"),
        })?;

        let template = Self::checked_template(&def.id, &regex, &def.output_template)?;

        let mut audience_templates = BTreeMap::new();
        for (level, source) in &def.audience_templates {
            let level = AudienceLevel::parse_str(level).ok_or_else(|| {
                RuleStoreError::InvalidRule {
                    rule_id: def.id.clone(),
                    reason: format!("unknown audience level '{level}'"),
                }
            })?;
            audience_templates.insert(level, Self::checked_template(&def.id, &regex, source)?);
        }

        let mut subject_areas: Vec<String> = Vec::with_capacity(def.contexts.len());
        for area in def.contexts {
            if !subject_areas.contains(&area) {
                subject_areas.push(area);
            }
        }
        if subject_areas.is_empty() {
            subject_areas.push(GENERAL_SUBJECT_AREA.to_string());
        }

        Ok(Self {
            id: def.id,
            name: def.name,
            description: def.description,
            regex,
            template,
            audience_templates,
            priority: def.priority,
            tags: def.tags,
            naturalness_score: def.naturalness_score,
            subject_areas,
        })
    }

    fn checked_template(
        rule_id: &str,
        regex: &Regex,
        source: &str,
    ) -> Result<Template, RuleStoreError> {
        let template = Template::parse(source);
        // captures_len counts the implicit whole-match group 0.
        let available = regex.captures_len() - 1;
        if let Some(group) = template.max_group() {
            if group > available {
                return Err(RuleStoreError::InvalidRule {
                    rule_id: rule_id.to_string(),
                    reason: format!(
                        "template references group {group} but the pattern has {available} groups"
                    ),
                });
            }
        }
        Ok(template)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Template used for `level`, falling back to the default output template.
    pub fn template_for(&self, level: AudienceLevel) -> &Template {
        self.audience_templates.get(&level).unwrap_or(&self.template)
    }
}

impl IRewriteRule for TemplateRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn subject_areas(&self) -> &[String] {
        &self.subject_areas
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn naturalness_score(&self) -> i32 {
        self.naturalness_score
    }

    fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn match_positions(&self, text: &str) -> Vec<(usize, usize)> {
        self.regex
            .find_iter(text)
            .map(|m| (m.start(), m.end()))
            .collect()
    }

    fn apply(&self, text: &str, context: &RuleContext) -> Result<Rewrite, RuleError> {
        if !self.regex.is_match(text) {
            return Ok(Rewrite::unchanged(text));
        }
        let template = self.template_for(context.audience_level);
        let rewritten = self
            .regex
            .replace_all(text, |caps: &Captures<'_>| template.render(caps));
        Ok(Rewrite::applied(rewritten.into_owned()))
    }
}
