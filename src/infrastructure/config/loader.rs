//! Layered configuration loading.

use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::errors::FormatError;
use crate::domain::models::config::Config;
use crate::services::DateTimeCodec;

/// Project-local configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "todofmt.yaml";

/// Prefix for environment overrides, e.g. `TODOFMT_FORMATTING__DATE_FORMAT`.
pub const ENV_PREFIX: &str = "TODOFMT_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Unknown tracing level.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Neither `json` nor `pretty`.
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    /// Patterns or timezone rejected by the codec.
    #[error("Invalid formatting configuration: {0}")]
    InvalidFormatting(#[from] FormatError),

    /// An explicitly requested file is missing.
    #[error("Configuration file not found: {0}")]
    MissingFile(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. ./todofmt.yaml (optional)
    /// 3. An explicitly requested file (must exist)
    /// 4. Environment variables (TODOFMT_* prefix, `__` nests)
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(DEFAULT_CONFIG_FILE));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::MissingFile(path.display().to_string()).into());
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Load configuration from a specific file, without env overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        // Patterns and timezone are checked by building a codec once
        DateTimeCodec::new(&config.formatting)?;

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.formatting.date_format, "%Y-%m-%d");
        assert_eq!(config.logging.level, "warn");
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r"
formatting:
  date_format: '%d.%m.%Y'
  timezone: Europe/Berlin
  porcelain: true
logging:
  level: debug
  format: json
",
        );
        let config = ConfigLoader::load_from_file(file.path()).expect("config should load");
        assert_eq!(config.formatting.date_format, "%d.%m.%Y");
        assert_eq!(config.formatting.time_format, "%H:%M");
        assert_eq!(config.formatting.timezone.as_deref(), Some("Europe/Berlin"));
        assert!(config.formatting.porcelain);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("formatting:\n  time_format: '%H:%M:%S'\n");
        temp_env::with_vars(
            [
                ("TODOFMT_FORMATTING__TIME_FORMAT", Some("%I:%M %p")),
                ("TODOFMT_FORMATTING__HUMANIZE", Some("true")),
            ],
            || {
                let config = ConfigLoader::load(Some(file.path())).expect("config should load");
                assert_eq!(config.formatting.time_format, "%I:%M %p");
                assert!(config.formatting.humanize);
            },
        );
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = ConfigLoader::load(Some(Path::new("/definitely/not/here.yaml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_validate_unknown_timezone() {
        let mut config = Config::default();
        config.formatting.timezone = Some("Moon/Tranquility".to_string());

        let result = ConfigLoader::validate(&config);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidFormatting(FormatError::Timezone(_)))
        ));
    }

    #[test]
    fn test_validate_invalid_pattern() {
        let mut config = Config::default();
        config.formatting.time_format = "%Q".to_string();

        let result = ConfigLoader::validate(&config);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidFormatting(FormatError::InvalidPattern { .. }))
        ));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();

        match ConfigLoader::validate(&config) {
            Err(ConfigError::InvalidLogLevel(level)) => assert_eq!(level, "verbose"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogFormat(_))
        ));
    }
}
