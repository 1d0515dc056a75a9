//! Pattern selection: merge domain and general rules into one ordered list.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::Instrument;

use mathspeak_core::constants::GENERAL_SUBJECT_AREA;
use mathspeak_core::errors::RuleStoreError;
use mathspeak_core::models::Expression;
use mathspeak_core::traits::{IRuleStore, RuleRef};

/// Picks the rules relevant to an expression.
pub struct PatternSelector<S> {
    store: Arc<S>,
}

impl<S> Clone for PatternSelector<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: IRuleStore> PatternSelector<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Rules for the expression's subject area followed by the general rules,
    /// deduplicated by id and ordered by descending priority.
    ///
    /// Store failures propagate. An empty list is a valid result.
    pub async fn select(&self, expression: &Expression) -> Result<Vec<RuleRef>, RuleStoreError> {
        let subject_area = expression.subject_area_or_general();
        let span = tracing::debug_span!("mathspeak.select", subject_area = %subject_area);
        async {
            let domain = self.store.find_by_subject_area(subject_area).await?;
            let general = self.store.find_by_subject_area(GENERAL_SUBJECT_AREA).await?;
            let (domain_count, general_count) = (domain.len(), general.len());
            let merged = merge_rules(domain, general);
            tracing::debug!(
                domain = domain_count,
                general = general_count,
                selected = merged.len(),
                "selected rules"
            );
            Ok(merged)
        }
        .instrument(span)
        .await
    }
}

/// Concatenate `domain` then `general`, keep the first rule seen for each id,
/// and stable-sort by descending priority so equal priorities keep the
/// domain-before-general order.
pub fn merge_rules(domain: Vec<RuleRef>, general: Vec<RuleRef>) -> Vec<RuleRef> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut merged: Vec<RuleRef> = domain
        .into_iter()
        .chain(general)
        .filter(|rule| seen.insert(rule.id().to_string()))
        .collect();
    merged.sort_by_key(|rule| std::cmp::Reverse(rule.priority()));
    merged
}
