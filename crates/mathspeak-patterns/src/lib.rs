//! # mathspeak-patterns
//!
//! Declarative rewrite rules: backreference templates, the `TemplateRule`
//! implementation of `IRewriteRule`, a TOML loader, and an in-memory store
//! indexed by subject area.

pub mod loader;
pub mod rule;
pub mod store;
pub mod template;

pub use loader::TomlRuleLoader;
pub use rule::TemplateRule;
pub use store::InMemoryRuleStore;
pub use template::Template;
