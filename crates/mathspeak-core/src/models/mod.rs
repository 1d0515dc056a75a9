pub mod context;
pub mod coverage_report;
pub mod expression;
pub mod match_result;
pub mod rule_definition;
pub mod speech_text;

pub use context::RuleContext;
pub use coverage_report::CoverageReport;
pub use expression::{AudienceLevel, ComplexityLevel, ComplexityMetrics, Expression, ExpressionKind};
pub use match_result::MatchResult;
pub use rule_definition::{RuleDefinition, RuleFile};
pub use speech_text::SpeechText;
