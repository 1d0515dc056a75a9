//! Error handling for mathspeak.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod processing_error;
pub mod rule_error;
pub mod rule_store_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use processing_error::{ProcessingError, ProcessingStage};
pub use rule_error::RuleError;
pub use rule_store_error::RuleStoreError;
