pub mod cancellation;
pub mod event_handler;
pub mod rewrite_rule;
pub mod rule_store;

pub use cancellation::{Cancellable, CancellationToken};
pub use event_handler::{
    NoopEventHandler, PassCompletedEvent, ProcessingCompletedEvent, ProcessingFailedEvent,
    ProcessingStartedEvent, RuleAppliedEvent, SpeechEventHandler,
};
pub use rewrite_rule::{IRewriteRule, Rewrite, RuleRef};
pub use rule_store::IRuleStore;
