use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub render: RenderConfig,
    /// Variables exposed to every template.
    #[serde(default)]
    pub globals: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Convert `markdown="1"` notice bodies to HTML after rendering.
    #[serde(default)]
    pub markdown: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Config file the values came from; `None` when using defaults.
    pub source: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub render: RenderConfig,
    pub globals: BTreeMap<String, String>,
}
