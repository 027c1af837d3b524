//! Configuration file loading for lumen.
//!
//! Reads `.lumen/lumen.json` and provides typed access to all settings.
//! Falls back to defaults when the config file is missing or incomplete.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::types::Severity;

/// Top-level lumen configuration. Unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumenConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub strict_mode: bool,
    #[serde(default)]
    pub ignore_rules: Vec<String>,
    #[serde(default)]
    pub custom_messages: BTreeMap<String, String>,
    /// Lowest severity that makes `lumen check` exit non-zero.
    #[serde(default = "default_fail_on")]
    pub fail_on: Severity,
    /// Seed context for the root of every checked tree.
    #[serde(default)]
    pub context: Context,
}

fn default_version() -> String {
    "0.1.0".to_string()
}
fn default_fail_on() -> Severity {
    Severity::Info
}

impl Default for LumenConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            strict_mode: false,
            ignore_rules: vec![],
            custom_messages: BTreeMap::new(),
            fail_on: default_fail_on(),
            context: Context::default(),
        }
    }
}

impl LumenConfig {
    /// Load configuration from `lumen.json` inside the given lumen directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(lumen_dir: &Path) -> Self {
        let config_path = lumen_dir.join("lumen.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }
}
