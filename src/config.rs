//! Configuration management for dateutils
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_DATETIME_PATTERN, DEFAULT_DATE_PATTERN,
    LOCAL_CONFIG_FILE,
};
use crate::diff::{self, Cascade, DiffUnit};
use crate::error::DateError;
use crate::utils::datetime;
use crate::utils::pattern::Pattern;
use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub format: FormatConfig,
    pub diff: DiffConfig,
    pub logging: LoggingConfig,
}

/// Calendar configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CalendarConfig {
    /// Zone used for "now" and for parsed dates
    /// Options: "local", "utc", or a fixed offset such as "+08:00"
    pub timezone: TimeZoneSetting,
}

/// Format configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Pattern for date-only values, e.g. "yyyy-MM-dd"
    pub date_pattern: String,
    /// Pattern for date-time values, e.g. "yyyy-MM-dd HH:mm:ss"
    pub datetime_pattern: String,
}

/// Difference configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DiffConfig {
    /// Fields checked before counting a year or month as complete ("date" or "datetime")
    pub cascade: Cascade,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Maximum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Write to the log file instead of stderr
    pub file: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
            datetime_pattern: DEFAULT_DATETIME_PATTERN.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: false,
        }
    }
}

impl LoggingConfig {
    /// Effective level filter; `Off` when logging is disabled
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        if !self.enabled {
            return Ok(log::LevelFilter::Off);
        }
        log::LevelFilter::from_str(&self.level).with_context(|| format!("Invalid logging level '{}'", self.level))
    }
}

/// Time zone choice for configured operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeZoneSetting {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl TimeZoneSetting {
    /// Current instant in this zone
    pub fn now(&self) -> DateTime<FixedOffset> {
        match self {
            TimeZoneSetting::Local => Local::now().fixed_offset(),
            TimeZoneSetting::Utc => Utc::now().fixed_offset(),
            TimeZoneSetting::Fixed(offset) => Utc::now().with_timezone(offset),
        }
    }

    /// Parse `input` with `pattern` in this zone
    pub fn parse(&self, input: &str, pattern: &str) -> Result<DateTime<FixedOffset>, DateError> {
        match self {
            TimeZoneSetting::Local => datetime::parse_date_with(input, pattern, &Local).map(|d| d.fixed_offset()),
            TimeZoneSetting::Utc => datetime::parse_date_with(input, pattern, &Utc).map(|d| d.fixed_offset()),
            TimeZoneSetting::Fixed(offset) => datetime::parse_date_with(input, pattern, offset),
        }
    }
}

impl FromStr for TimeZoneSetting {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(TimeZoneSetting::Local),
            "utc" | "z" => Ok(TimeZoneSetting::Utc),
            other => other
                .parse::<FixedOffset>()
                .map(TimeZoneSetting::Fixed)
                .map_err(|_| DateError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl TryFrom<String> for TimeZoneSetting {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, DateError> {
        value.parse()
    }
}

impl From<TimeZoneSetting> for String {
    fn from(value: TimeZoneSetting) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSetting::Local => f.write_str("local"),
            TimeZoneSetting::Utc => f.write_str("utc"),
            TimeZoneSetting::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl Config {
    /// Load the first existing file of [`Config::search_paths`], or defaults
    pub fn load() -> Result<Self> {
        match Self::search_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => Self::load_from_file(path),
            None => {
                log::debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Candidate files, highest precedence first: `./dateutils.toml`, then
    /// `<config dir>/dateutils/config.toml`
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        paths.extend(Self::get_default_config_path().ok());
        paths
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let date_pattern = Pattern::compile(&self.format.date_pattern).context("Invalid date_pattern")?;
        if !date_pattern.has_date() {
            anyhow::bail!("date_pattern '{}' has no date fields", self.format.date_pattern);
        }

        Pattern::compile(&self.format.datetime_pattern).context("Invalid datetime_pattern")?;

        // checked even when logging is disabled so enabling it later cannot fail
        log::LevelFilter::from_str(&self.logging.level)
            .with_context(|| format!("Invalid logging level '{}'", self.logging.level))?;

        Ok(())
    }

    /// Current instant in the configured zone
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.calendar.timezone.now()
    }

    /// Current instant formatted with the configured date-time pattern
    pub fn current_date(&self) -> Result<String, DateError> {
        datetime::format_date(&self.now(), &self.format.datetime_pattern)
    }

    /// Format a timestamp with the configured date-time pattern
    pub fn format_date<Tz>(&self, date: &DateTime<Tz>) -> Result<String, DateError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        datetime::format_date(date, &self.format.datetime_pattern)
    }

    /// Parse a string with the configured date pattern in the configured zone
    pub fn parse_date(&self, input: &str) -> Result<DateTime<FixedOffset>, DateError> {
        self.calendar.timezone.parse(input, &self.format.date_pattern)
    }

    /// Difference using the configured cascade
    pub fn diff<Tz: TimeZone>(
        &self,
        earlier: &DateTime<Tz>,
        later: &DateTime<Tz>,
        unit: DiffUnit,
    ) -> Result<i64, DateError> {
        diff::diff_with(earlier, later, unit, self.diff.cascade)
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# dateutils Configuration File\n# Generated on {}\n\n",
            Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// `<config dir>/dateutils/config.toml`, the target of `generate_default_config`
    pub fn get_default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
