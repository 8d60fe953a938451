use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::models::MealType;

/// Source of a configuration value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking. Carries ambient settings
/// only; the planner itself needs none.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the tracing subscriber writes (the TUI owns the terminal)
    pub log_file: ConfigValue<PathBuf>,
    /// Slot the form starts on
    pub default_meal_type: ConfigValue<MealType>,
    /// Config file path used (if any)
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    log_file: Option<PathBuf>,
    default_meal_type: Option<String>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut log_file = ConfigValue::new(
            Self::default_data_dir().join("mealboard.log"),
            ConfigSource::Default,
        );
        let mut default_meal_type = ConfigValue::new(MealType::Breakfast, ConfigSource::Default);
        let mut config_file = None;

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::Read(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::Parse(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(file_path) = file_config.log_file {
                // Resolve relative paths against config file's directory
                let resolved = if file_path.is_relative() {
                    path.parent()
                        .map(|p| p.join(&file_path))
                        .unwrap_or(file_path)
                } else {
                    file_path
                };
                log_file = ConfigValue::new(resolved, ConfigSource::File);
            }
            if let Some(slot) = file_config.default_meal_type {
                let parsed = MealType::from_str(&slot)
                    .map_err(|e| ConfigError::InvalidMealType(slot, e))?;
                default_meal_type = ConfigValue::new(parsed, ConfigSource::File);
            }
        }

        // Apply environment variable overrides
        if let Ok(file_path) = std::env::var("MEALBOARD_LOG_FILE") {
            log_file = ConfigValue::new(PathBuf::from(file_path), ConfigSource::Environment);
        }
        if let Ok(slot) = std::env::var("MEALBOARD_DEFAULT_TYPE") {
            let parsed =
                MealType::from_str(&slot).map_err(|e| ConfigError::InvalidMealType(slot, e))?;
            default_meal_type = ConfigValue::new(parsed, ConfigSource::Environment);
        }

        Ok(Self {
            log_file,
            default_meal_type,
            config_file,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/mealboard/
    /// - macOS: ~/Library/Application Support/mealboard/
    /// - Windows: %APPDATA%/mealboard/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mealboard")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/mealboard/
    /// - macOS: ~/Library/Application Support/mealboard/
    /// - Windows: %APPDATA%/mealboard/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mealboard")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {err}", path = .0.display(), err = .1)]
    Read(PathBuf, std::io::Error),
    #[error("failed to parse config file '{path}': {err}", path = .0.display(), err = .1)]
    Parse(PathBuf, serde_yaml::Error),
    #[error("invalid meal type '{0}' in configuration: {1}")]
    InvalidMealType(String, String),
}
