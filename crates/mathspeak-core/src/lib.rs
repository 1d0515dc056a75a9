//! # mathspeak-core
//!
//! Foundation crate for the mathspeak rewrite engine.
//! Defines the expression and result models, the rule and rule-store traits,
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MathspeakConfig;
pub use errors::{ProcessingError, ProcessingStage, RuleError, RuleStoreError};
pub use models::{Expression, MatchResult, RuleContext, SpeechText};
pub use traits::{IRewriteRule, IRuleStore, RuleRef};
