use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "TOPSIS_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Field separator used for both the input and the output table
    pub delimiter: char,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Decimal places for `Topsis Score`; shortest exact form when unset
    pub precision: Option<usize>,
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// tracing filter directive used when RUST_LOG is unset
    pub level: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: None,
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load the default config file, falling back to defaults when it is absent.
    /// The file is never created.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_custom(&path)
    }

    /// Load an explicitly requested config file, which must exist
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(config_path).map_err(|e| {
            AppError::Config(format!("Failed to read {}: {}", config_path.display(), e))
        })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        let delimiter = self.input.delimiter;
        if !delimiter.is_ascii() || matches!(delimiter, '"' | '\n' | '\r') {
            return Err(AppError::Config(format!(
                "Delimiter must be a single ASCII character other than a quote or newline, got {:?}",
                delimiter
            )));
        }

        if self.output.precision.is_some_and(|p| p > 17) {
            return Err(AppError::Config(
                "Output precision cannot exceed 17 decimal places".to_string(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(AppError::Config("Logging level cannot be empty".to_string()));
        }

        Ok(())
    }

    /// `$TOPSIS_CONFIG` when set, else `<config dir>/topsis/config.toml`
    pub fn config_file_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("topsis")
            .join("config.toml")
    }
}
