//! Declarative TOML rule definitions, user-extensible without recompiling.
//!
//! ```toml
//! [[patterns]]
//! id = "equation_sum"
//! name = "Sum equation"
//! pattern = '(\w+) \+ (\w+) = (\w+)'
//! output_template = 'the equation \1 plus \2 equals \3'
//! priority = 50
//! contexts = ["algebra"]
//! ```

use std::path::Path;

use mathspeak_core::errors::RuleStoreError;
use mathspeak_core::models::RuleFile;

use crate::rule::TemplateRule;

/// Loader for TOML rule definitions.
pub struct TomlRuleLoader;

impl TomlRuleLoader {
    /// Load rules from a TOML string.
    pub fn load_from_str(toml_str: &str) -> Result<Vec<TemplateRule>, RuleStoreError> {
        Self::load_named(toml_str, "<string>")
    }

    /// Load rules from a file path.
    pub fn load_from_file(path: &Path) -> Result<Vec<TemplateRule>, RuleStoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| RuleStoreError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::load_named(&content, &path.display().to_string())
    }

    /// Load every `*.toml` file in `dir`, in file-name order.
    pub fn load_from_dir(dir: &Path) -> Result<Vec<TemplateRule>, RuleStoreError> {
        let read_failed = |e: std::io::Error| RuleStoreError::ReadFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        };
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_failed)? {
            let path = entry.map_err(read_failed)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut rules = Vec::new();
        for path in &paths {
            rules.extend(Self::load_from_file(path)?);
        }
        tracing::debug!(
            dir = %dir.display(),
            files = paths.len(),
            rules = rules.len(),
            "loaded rule directory"
        );
        Ok(rules)
    }

    fn load_named(toml_str: &str, source_name: &str) -> Result<Vec<TemplateRule>, RuleStoreError> {
        let file: RuleFile = toml::from_str(toml_str).map_err(|e| RuleStoreError::ParseFailed {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

        let mut rules = Vec::with_capacity(file.patterns.len());
        for def in file.patterns {
            if def.enabled == Some(false) {
                tracing::debug!(rule_id = %def.id, "skipping disabled rule");
                continue;
            }
            rules.push(TemplateRule::compile(def)?);
        }
        Ok(rules)
    }
}
