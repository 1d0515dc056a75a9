//! Coverage analysis: which expressions of a corpus any rule matches.

use std::collections::BTreeMap;

use tracing::Instrument;

use mathspeak_core::constants::{ELLIPSIS, MAX_UNMATCHED_SAMPLES, UNMATCHED_SAMPLE_CHARS};
use mathspeak_core::errors::RuleStoreError;
use mathspeak_core::models::{CoverageReport, Expression, MatchResult};
use mathspeak_core::traits::IRuleStore;

use crate::selector::PatternSelector;

/// Read-only batch diagnostic. Only tests `matches`; never rewrites text or
/// touches the expressions.
pub struct CoverageAnalyzer<S> {
    selector: PatternSelector<S>,
}

impl<S: IRuleStore> CoverageAnalyzer<S> {
    pub fn new(selector: PatternSelector<S>) -> Self {
        Self { selector }
    }

    pub async fn analyze(&self, expressions: &[Expression]) -> Result<CoverageReport, RuleStoreError> {
        let span = tracing::info_span!("mathspeak.coverage", expressions = expressions.len());
        async {
            let mut matched_expressions = 0usize;
            let mut unmatched_expressions = 0usize;
            let mut pattern_usage: BTreeMap<String, usize> = BTreeMap::new();
            let mut unmatched_samples = Vec::new();

            for expression in expressions {
                let rules = self.selector.select(expression).await?;
                let hits: Vec<MatchResult> = rules
                    .iter()
                    .map(|rule| MatchResult::probe(rule, &expression.raw_text))
                    .filter(|result| result.matched)
                    .collect();

                if hits.is_empty() {
                    unmatched_expressions += 1;
                    if unmatched_samples.len() < MAX_UNMATCHED_SAMPLES {
                        unmatched_samples.push(sample(&expression.raw_text));
                    }
                    continue;
                }

                matched_expressions += 1;
                for hit in &hits {
                    *pattern_usage.entry(hit.rule_id().to_string()).or_insert(0) += 1;
                }
            }

            let total_expressions = expressions.len();
            let report = CoverageReport {
                total_expressions,
                matched_expressions,
                unmatched_expressions,
                coverage_percentage: CoverageReport::percentage(
                    matched_expressions,
                    total_expressions,
                ),
                pattern_usage,
                unmatched_samples,
            };
            tracing::info!(
                total = report.total_expressions,
                matched = report.matched_expressions,
                coverage = report.coverage_percentage,
                "coverage analysis complete"
            );
            Ok(report)
        }
        .instrument(span)
        .await
    }
}

/// At most the first 100 characters of `raw`, always followed by the
/// ellipsis marker.
fn sample(raw: &str) -> String {
    let kept = raw
        .char_indices()
        .nth(UNMATCHED_SAMPLE_CHARS)
        .map_or(raw, |(cut, _)| &raw[..cut]);
    format!("{kept}{ELLIPSIS}")
}
