//! ErrorCode trait for stable, machine-readable error classification.

/// Every error enum implements this to provide a structured error code string
/// that callers can match on without parsing messages.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "TIMEOUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NO_PATTERNS_FOUND: &str = "NO_PATTERNS_FOUND";
pub const TIMEOUT: &str = "TIMEOUT";
pub const UNEXPECTED_FAILURE: &str = "UNEXPECTED_FAILURE";
pub const RULE_STORE_ERROR: &str = "RULE_STORE_ERROR";
pub const RULE_ERROR: &str = "RULE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
