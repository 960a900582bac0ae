//! Configuration file loading for rpclint.
//!
//! Reads `rpclint.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "rpclint.json";

/// Top-level rpclint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub traits: TraitConfig,
    #[serde(default)]
    pub suppressions: Vec<SuppressionConfig>,
    /// Glob patterns over shape ids; diagnostics on matching shapes are suppressed.
    #[serde(default)]
    pub ignore_shapes: Vec<String>,
    #[serde(default = "default_true")]
    pub parallel: bool,
}

/// Per-rule enable toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default = "default_true")]
    pub notification_output: bool,
    #[serde(default = "default_true")]
    pub payload_placement: bool,
    #[serde(default = "default_true")]
    pub method_presence: bool,
    #[serde(default = "default_true")]
    pub unique_method_names: bool,
}

/// Overrides for the trait ids the rules look up. Unset fields keep the
/// `jsonrpclib` defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraitConfig {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub request: Option<String>,
    #[serde(default)]
    pub notification: Option<String>,
    #[serde(default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Suppress one rule, either everywhere (`"*"`) or within one namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressionConfig {
    pub id: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub reason: Option<String>,
}

fn default_true() -> bool {
    true
}
fn default_version() -> String {
    "0.3.0".to_string()
}
fn default_namespace() -> String {
    "*".to_string()
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            notification_output: true,
            payload_placement: true,
            method_presence: true,
            unique_method_names: true,
        }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            rules: RulesConfig::default(),
            traits: TraitConfig::default(),
            suppressions: vec![],
            ignore_shapes: vec![],
            parallel: true,
        }
    }
}

impl LintConfig {
    /// Load configuration from the given file.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(config_path: &Path) -> Self {
        let content = match std::fs::read_to_string(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(path = %config_path.display(), error = %e, "no config file, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    "failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Load `rpclint.json` from a directory.
    pub fn load_from_dir(dir: &Path) -> Self {
        Self::load(&dir.join(CONFIG_FILE_NAME))
    }
}
