use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::EmptyRowPolicy;

pub const DEFAULT_WRAP_WIDTH: u32 = 30;
pub const DEFAULT_SOURCE_SUFFIX: &str = "AF.csv";

/// Import settings shared by every sheet in a project.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Characters per display line used for height estimates.
    pub wrap_width: u32,
    pub empty_row: EmptyRowPolicy,
    /// File name fragment that marks a CSV as an Active Format sheet.
    pub source_suffix: String,
    /// Reject sheets whose header row does not carry the expected titles.
    pub strict_header: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            empty_row: EmptyRowPolicy::default(),
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
            strict_header: false,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    #[diagnostic(
        code(config::not_found),
        help("run `afdialogue init-config <path>` to write a default config")
    )]
    NotFound(PathBuf),

    #[error("failed to parse config: {0}")]
    #[diagnostic(code(config::parse_error))]
    ParseError(#[from] toml::de::Error),

    #[error("failed to write config: {0}")]
    #[diagnostic(code(config::write_error))]
    WriteError(#[from] toml::ser::Error),

    #[error("io error: {0}")]
    #[diagnostic(code(config::io_error))]
    IoError(#[from] std::io::Error),
}

impl ImportConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// load a config from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// save the config to a file path.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
