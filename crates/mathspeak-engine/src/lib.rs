//! # mathspeak-engine
//!
//! Turns an expression's raw markup into speech text:
//! select rules → bounded priority-ordered rewrite → textual post-processing.
//! Also provides the read-only coverage analyzer.

pub mod applier;
pub mod context;
pub mod coverage;
pub mod engine;
pub mod events;
pub mod post_process;
pub mod selector;

pub use applier::{ApplierOutcome, ApplyError, PatternApplier};
pub use context::build_context;
pub use coverage::CoverageAnalyzer;
pub use engine::SpeechEngine;
pub use events::TracingEventHandler;
pub use post_process::PostProcessor;
pub use selector::{merge_rules, PatternSelector};
