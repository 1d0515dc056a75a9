//! In-memory rule store indexed by subject area.

use std::path::Path;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use mathspeak_core::config::RulesConfig;
use mathspeak_core::errors::RuleStoreError;
use mathspeak_core::traits::{IRuleStore, RuleRef};

use crate::loader::TomlRuleLoader;

/// Rules grouped by subject-area tag, in registration order.
///
/// Built once at startup and then only read, so concurrent lookups need no
/// locking. A rule listing several subject areas is shared (one `Arc`)
/// between their buckets.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRuleStore {
    by_subject_area: FxHashMap<String, Vec<RuleRef>>,
}

impl InMemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-constructed rules.
    pub fn from_rules<I>(rules: I) -> Result<Self, RuleStoreError>
    where
        I: IntoIterator<Item = RuleRef>,
    {
        let mut store = Self::new();
        for rule in rules {
            store.insert(rule)?;
        }
        Ok(store)
    }

    /// Build a store from a TOML rule file's contents.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, RuleStoreError> {
        let rules = TomlRuleLoader::load_from_str(toml_str)?;
        Self::from_rules(rules.into_iter().map(|r| Arc::new(r) as RuleRef))
    }

    /// Build a store from every `*.toml` file in `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, RuleStoreError> {
        let mut store = Self::new();
        store.load_dir(dir)?;
        Ok(store)
    }

    /// Build a store from the configured rule directories, in order.
    pub fn from_config(config: &RulesConfig) -> Result<Self, RuleStoreError> {
        let mut store = Self::new();
        for dir in &config.directories {
            store.load_dir(dir)?;
        }
        Ok(store)
    }

    fn load_dir(&mut self, dir: &Path) -> Result<(), RuleStoreError> {
        for rule in TomlRuleLoader::load_from_dir(dir)? {
            self.insert(Arc::new(rule))?;
        }
        Ok(())
    }

    /// Register `rule` under each of its subject areas. Ids are unique per
    /// subject area.
    pub fn insert(&mut self, rule: RuleRef) -> Result<(), RuleStoreError> {
        for area in rule.subject_areas() {
            let bucket = self.by_subject_area.get(area.as_str());
            if bucket.is_some_and(|rules| rules.iter().any(|r| r.id() == rule.id())) {
                return Err(RuleStoreError::DuplicateRule {
                    rule_id: rule.id().to_string(),
                    subject_area: area.clone(),
                });
            }
        }
        for area in rule.subject_areas() {
            self.by_subject_area
                .entry(area.clone())
                .or_default()
                .push(Arc::clone(&rule));
        }
        Ok(())
    }

    /// Number of distinct registrations across all subject areas.
    pub fn registration_count(&self) -> usize {
        self.by_subject_area.values().map(Vec::len).sum()
    }

    /// Subject areas with at least one rule, sorted.
    pub fn subject_areas(&self) -> Vec<&str> {
        let mut areas: Vec<&str> = self.by_subject_area.keys().map(String::as_str).collect();
        areas.sort_unstable();
        areas
    }
}

impl IRuleStore for InMemoryRuleStore {
    async fn find_by_subject_area(
        &self,
        subject_area: &str,
    ) -> Result<Vec<RuleRef>, RuleStoreError> {
        Ok(self
            .by_subject_area
            .get(subject_area)
            .cloned()
            .unwrap_or_default())
    }
}
