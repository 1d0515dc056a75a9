//! On-disk rule record, as written in TOML rule files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single rule definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Regular expression with capturing groups.
    pub pattern: String,
    /// Replacement text with `\1`, `\2`, … backreferences.
    pub output_template: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub naturalness_score: i32,
    /// Subject-area tags the rule is registered under.
    #[serde(default, alias = "subject_areas")]
    pub contexts: Vec<String>,
    /// Audience level → template override.
    #[serde(default)]
    pub audience_templates: BTreeMap<String, String>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// A collection of rule definitions, one TOML file's worth.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleFile {
    #[serde(default)]
    pub patterns: Vec<RuleDefinition>,
}
