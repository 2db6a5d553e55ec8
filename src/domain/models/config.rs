//! Configuration models.

use serde::{Deserialize, Serialize};

/// Main configuration structure for todofmt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Date/time patterns, timezone and output mode
    #[serde(default)]
    pub formatting: FormattingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Formatter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FormattingConfig {
    /// strftime pattern for dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// strftime pattern for times of day
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Joins the date and time patterns
    #[serde(default = "default_dt_separator")]
    pub dt_separator: String,

    /// IANA timezone name; unset or "local" uses the system zone
    #[serde(default)]
    pub timezone: Option<String>,

    /// Render due dates as relative phrases
    #[serde(default)]
    pub humanize: bool,

    /// Emit machine-readable JSON (takes precedence over `humanize`)
    #[serde(default)]
    pub porcelain: bool,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_time_format() -> String {
    "%H:%M".to_string()
}

fn default_dt_separator() -> String {
    " ".to_string()
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            time_format: default_time_format(),
            dt_separator: default_dt_separator(),
            timezone: None,
            humanize: false,
            porcelain: false,
        }
    }
}

impl FormattingConfig {
    /// Date and time patterns joined by the separator, skipping empty ones.
    pub fn datetime_format(&self) -> String {
        [self.date_format.as_str(), self.time_format.as_str()]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(self.dt_separator.as_str())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
