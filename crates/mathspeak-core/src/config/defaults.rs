// Single source of truth for all default values.

// --- Engine ---
pub const DEFAULT_MAX_ITERATIONS: usize = 10;
pub const DEFAULT_TIMEOUT_SECONDS: f64 = 5.0;

// --- Post-processing ---
pub const DEFAULT_BASIC_PHRASES: &[(&str, &str)] = &[
    ("with respect to", "by"),
    ("such that", "where"),
    ("implies", "means"),
    ("if and only if", "exactly when"),
];
pub const DEFAULT_ADVANCED_PHRASES: &[(&str, &str)] = &[
    (" dot ", " inner product "),
    ("natural log", "natural logarithm"),
];

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

// --- Files & environment ---
pub const PROJECT_CONFIG_FILENAME: &str = "mathspeak.toml";
pub const ENV_MAX_ITERATIONS: &str = "MATHSPEAK_MAX_ITERATIONS";
pub const ENV_TIMEOUT_SECONDS: &str = "MATHSPEAK_TIMEOUT_SECONDS";
pub const ENV_LOG_LEVEL: &str = "MATHSPEAK_LOG_LEVEL";
