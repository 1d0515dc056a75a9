use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Rewrite loop configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on rewrite passes per expression.
    pub max_iterations: usize,
    /// Time budget for the rewrite loop, in seconds.
    pub timeout_seconds: f64,
}

impl EngineConfig {
    /// The time budget as a `Duration`. Budgets too large for a `Duration`
    /// saturate to `Duration::MAX`. Negative and NaN budgets collapse to zero;
    /// `MathspeakConfig::validate` rejects them before they reach the engine.
    pub fn timeout(&self) -> Duration {
        match Duration::try_from_secs_f64(self.timeout_seconds) {
            Ok(budget) => budget,
            Err(_) if self.timeout_seconds > 0.0 => Duration::MAX,
            Err(_) => Duration::ZERO,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
            timeout_seconds: defaults::DEFAULT_TIMEOUT_SECONDS,
        }
    }
}
