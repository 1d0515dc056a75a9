//! Configuration system for mathspeak.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod defaults;
pub mod engine_config;
pub mod mathspeak_config;
pub mod observability_config;
pub mod post_processing_config;
pub mod rules_config;

pub use engine_config::EngineConfig;
pub use mathspeak_config::MathspeakConfig;
pub use observability_config::ObservabilityConfig;
pub use post_processing_config::{PhraseSubstitution, PostProcessingConfig};
pub use rules_config::RulesConfig;
