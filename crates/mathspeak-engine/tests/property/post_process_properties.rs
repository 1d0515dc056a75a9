use mathspeak_core::config::PostProcessingConfig;
use mathspeak_core::models::{ComplexityMetrics, Expression};
use mathspeak_engine::PostProcessor;
use proptest::prelude::*;

const TOKENS: &[&str] = &[
    "x", "y", "dot", "natural", "log", "logarithm", "such", "that", "implies", "with",
    "respect", "to", "if", "and", "only", "equals", ".", ",", ";", ":", " ", "  ", "\t", "\n",
];

fn processor() -> PostProcessor {
    PostProcessor::new(&PostProcessingConfig::default()).unwrap()
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(TOKENS), 0..24).prop_map(|parts| parts.concat())
}

fn arb_expression() -> impl Strategy<Value = Expression> {
    prop_oneof![
        Just(None),
        (0.0f64..1.0).prop_map(Some),
    ]
    .prop_map(|score| match score {
        Some(score) => Expression::new("").with_complexity(ComplexityMetrics::from_score(score)),
        None => Expression::new(""),
    })
}

proptest! {
    #[test]
    fn processing_is_idempotent(text in arb_text(), expression in arb_expression()) {
        let pp = processor();
        let once = pp.process(&text, &expression);
        let twice = pp.process(&once, &expression);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_has_no_whitespace_runs_or_padding(text in arb_text(), expression in arb_expression()) {
        let out = processor().process(&text, &expression);
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.contains('\t') && !out.contains('\n'));
        prop_assert_eq!(out.trim(), out.as_str());
        for fix in [" .", " ,", " ;", " :"] {
            prop_assert!(!out.contains(fix));
        }
    }
}

#[test]
fn phrase_tables_follow_complexity() {
    let pp = processor();
    let text = "f implies g dot h";

    let basic = Expression::new("").with_complexity(ComplexityMetrics::from_score(0.1));
    assert_eq!(pp.process(text, &basic), "F means g dot h");

    let advanced = Expression::new("").with_complexity(ComplexityMetrics::from_score(0.8));
    assert_eq!(pp.process(text, &advanced), "F implies g inner product h");

    let intermediate = Expression::new("").with_complexity(ComplexityMetrics::from_score(0.5));
    assert_eq!(pp.process(text, &intermediate), "F implies g dot h");

    assert_eq!(pp.process(text, &Expression::new("")), "F implies g dot h");
}
