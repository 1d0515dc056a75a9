mod common;

use std::sync::Arc;

use mathspeak_core::models::Expression;
use mathspeak_engine::{CoverageAnalyzer, PatternSelector};

use common::{replace, StaticStore};

fn analyzer(store: StaticStore) -> CoverageAnalyzer<StaticStore> {
    CoverageAnalyzer::new(PatternSelector::new(Arc::new(store)))
}

fn store() -> StaticStore {
    StaticStore::new()
        .with(
            "calculus",
            vec![replace("integral", 5, "calculus", "\\int", "the integral of")],
        )
        .with(
            "general",
            vec![
                replace("plus", 1, "general", "+", "plus"),
                replace("equals", 1, "general", "=", "equals"),
            ],
        )
}

#[tokio::test]
async fn counts_matches_and_rule_usage() {
    let corpus = vec![
        Expression::new("a + b = c"),
        Expression::new("\\int f + g").with_subject_area("calculus"),
        Expression::new("\\int f"),
        Expression::new("\\sqrt{x}"),
    ];

    let report = analyzer(store()).analyze(&corpus).await.unwrap();

    assert_eq!(report.total_expressions, 4);
    assert_eq!(report.matched_expressions, 2);
    assert_eq!(report.unmatched_expressions, 2);
    assert_eq!(report.coverage_percentage, 50.0);
    assert_eq!(report.usage("plus"), 2);
    assert_eq!(report.usage("equals"), 1);
    assert_eq!(report.usage("integral"), 1);
    assert_eq!(report.usage("unknown"), 0);
    assert_eq!(report.unmatched_samples, vec!["\\int f...", "\\sqrt{x}..."]);
}

#[tokio::test]
async fn empty_corpus_has_zero_coverage() {
    let report = analyzer(store()).analyze(&[]).await.unwrap();
    assert_eq!(report.total_expressions, 0);
    assert_eq!(report.coverage_percentage, 0.0);
    assert!(report.pattern_usage.is_empty());
}

#[tokio::test]
async fn samples_are_capped_but_counting_continues() {
    let corpus: Vec<Expression> = (0..25).map(|i| Expression::new(format!("y_{i}"))).collect();

    let report = analyzer(store()).analyze(&corpus).await.unwrap();

    assert_eq!(report.unmatched_expressions, 25);
    assert_eq!(report.matched_expressions + report.unmatched_expressions, 25);
    assert_eq!(report.unmatched_samples.len(), 10);
    assert_eq!(report.unmatched_samples[0], "y_0...");
    assert_eq!(report.unmatched_samples[9], "y_9...");
}

#[tokio::test]
async fn long_unmatched_text_is_truncated() {
    let long = "q".repeat(250);
    let report = analyzer(store())
        .analyze(&[Expression::new(long.clone())])
        .await
        .unwrap();
    let sample = &report.unmatched_samples[0];
    assert_eq!(sample, &format!("{}...", &long[..100]));
}

#[tokio::test]
async fn analysis_leaves_expressions_untouched() {
    let corpus = vec![Expression::new("a + b")];
    let before = corpus.clone();
    analyzer(store()).analyze(&corpus).await.unwrap();
    assert_eq!(corpus, before);
    assert!(corpus[0].transformations.is_empty());
}

#[tokio::test]
async fn store_failure_aborts_analysis() {
    let result = analyzer(StaticStore::unavailable())
        .analyze(&[Expression::new("x")])
        .await;
    assert!(result.is_err());
}
