//! Configuration loading from benchpress.toml
//!
//! Benchpress configuration can be specified in a `benchpress.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.
//! Command-line flags always take precedence over values from the file.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up during discovery
pub const CONFIG_FILE: &str = "benchpress.toml";

/// Benchpress configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BenchpressConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Report configuration
    #[serde(default)]
    pub report: ReportConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "cli", "markdown", "csv", "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Directory to write `report.<ext>` into instead of stdout
    #[serde(default)]
    pub directory: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            directory: None,
        }
    }
}

fn default_format() -> String {
    "cli".to_string()
}

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    /// Subject column order used when a result document does not list one
    #[serde(default)]
    pub subjects: Vec<String>,
}

impl BenchpressConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for a configuration file
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "loading configuration");
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(
                            path = %config_path.display(),
                            error = %e,
                            "ignoring unreadable configuration"
                        );
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Benchpress Configuration

[output]
# Default output format: cli, markdown, csv, json
format = "cli"
# Write report.<ext> into this directory instead of stdout (uncomment to enable)
# directory = "target/benchpress"

[report]
# Subject column order when the result document does not list subjects
subjects = []
"#
        .to_string()
    }
}
