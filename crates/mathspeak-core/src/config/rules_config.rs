use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where rule definition files are loaded from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Directories scanned for `*.toml` rule files, in order.
    pub directories: Vec<PathBuf>,
}
