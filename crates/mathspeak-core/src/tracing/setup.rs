//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the mathspeak tracing/logging system.
///
/// Reads `MATHSPEAK_LOG` for per-module log levels.
/// Format: `MATHSPEAK_LOG=mathspeak_engine=debug,mathspeak_patterns=warn`
///
/// Falls back to `default_level` for all mathspeak crates if `MATHSPEAK_LOG`
/// is not set or is invalid. Calling it more than once is a no-op.
pub fn init_tracing(default_level: &str) {
    let fallback = format!(
        "mathspeak_core={default_level},mathspeak_patterns={default_level},mathspeak_engine={default_level}"
    );
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("MATHSPEAK_LOG")
            .unwrap_or_else(|_| EnvFilter::new(fallback));

        // A subscriber installed by the host application wins.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
