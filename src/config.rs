//! Configuration management for the `Trippin` client
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TrippinError;
use crate::theme::Theme;
use anyhow::{Context, Result};
use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `Trippin` client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrippinConfig {
    /// Itinerary service configuration
    #[serde(default)]
    pub service: ServiceConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Terminal display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Itinerary service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL the `/generate-itinerary` path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Terminal display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Initial theme
    #[serde(default)]
    pub theme: Theme,
    /// Emit ANSI colors
    #[serde(default = "default_color")]
    pub color: bool,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            color: default_color(),
        }
    }
}

impl TrippinConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        Self::load_with_env(config_path, None)
    }

    /// Load configuration, reading `TRIPPIN_*` overrides from `env` instead of
    /// the process environment when it is given
    fn load_with_env(
        config_path: Option<PathBuf>,
        env: Option<Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TRIPPIN_SERVICE__BASE_URL=https://api.example.com
        builder = builder.add_source(
            Environment::with_prefix("TRIPPIN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TrippinConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trippin").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.service.base_url.trim().is_empty() {
            self.service.base_url = default_base_url();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_service()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_service(&self) -> Result<()> {
        let base_url = &self.service.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(TrippinError::config(format!(
                "Service base URL must be a valid HTTP or HTTPS URL, got '{base_url}'"
            ))
            .into());
        }

        if self.service.timeout_seconds == 0 {
            return Err(TrippinError::config("Service timeout must be at least 1 second").into());
        }

        if self.service.timeout_seconds > 300 {
            return Err(
                TrippinError::config("Service timeout cannot exceed 300 seconds").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TrippinError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TrippinError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
