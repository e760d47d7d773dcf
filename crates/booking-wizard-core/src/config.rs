//! Wizard configuration.
//!
//! Values come from [`Default`], a JSON document, or `BOOKING_*` environment
//! variables. Times are written as `"HH:MM"`.

use std::env;
use std::path::Path;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Opening hours and availability simulation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScheduleConfig {
    /// First slot of the day
    #[serde(with = "hhmm")]
    pub opening: NaiveTime,
    /// Last slot of the day (inclusive)
    #[serde(with = "hhmm")]
    pub closing: NaiveTime,
    /// Cadence between slot labels
    pub slot_minutes: u32,
    /// Lunch break start (inclusive)
    #[serde(with = "hhmm")]
    pub lunch_start: NaiveTime,
    /// Lunch break end (exclusive)
    #[serde(with = "hhmm")]
    pub lunch_end: NaiveTime,
    /// Probability that a slot outside lunch is free
    pub availability_rate: f64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            opening: time(8, 0),
            closing: time(18, 0),
            slot_minutes: 30,
            lunch_start: time(12, 0),
            lunch_end: time(14, 0),
            availability_rate: 0.6,
        }
    }
}

impl ScheduleConfig {
    /// Check internal consistency.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.opening > self.closing {
            return Err(ConfigError::Invalid(format!(
                "opening {} is after closing {}",
                self.opening.format("%H:%M"),
                self.closing.format("%H:%M")
            )));
        }
        if self.slot_minutes == 0 || self.slot_minutes > 24 * 60 {
            return Err(ConfigError::Invalid(format!(
                "slot length must be between 1 and 1440 minutes, got {}",
                self.slot_minutes
            )));
        }
        if self.lunch_start > self.lunch_end {
            return Err(ConfigError::Invalid(format!(
                "lunch start {} is after lunch end {}",
                self.lunch_start.format("%H:%M"),
                self.lunch_end.format("%H:%M")
            )));
        }
        if !(0.0..=1.0).contains(&self.availability_rate) {
            return Err(ConfigError::Invalid(format!(
                "availability rate must be within [0, 1], got {}",
                self.availability_rate
            )));
        }
        Ok(())
    }

    /// Whether a slot starting at `start` falls in the lunch break.
    pub fn is_lunch(&self, start: NaiveTime) -> bool {
        start >= self.lunch_start && start < self.lunch_end
    }

    /// Number of slot labels in a day.
    pub fn slots_per_day(&self) -> usize {
        if self.opening > self.closing {
            return 0;
        }
        let span = u64::from(
            self.closing.num_seconds_from_midnight() - self.opening.num_seconds_from_midnight(),
        );
        let step = u64::from(self.slot_minutes.max(1)) * 60;
        (span / step) as usize + 1
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WizardConfig {
    pub schedule: ScheduleConfig,
}

impl WizardConfig {
    /// Read overrides from `BOOKING_*` variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = ScheduleConfig::default();
        let schedule = ScheduleConfig {
            opening: env_time("BOOKING_OPENING", defaults.opening),
            closing: env_time("BOOKING_CLOSING", defaults.closing),
            slot_minutes: env_parse("BOOKING_SLOT_MINUTES", defaults.slot_minutes),
            lunch_start: env_time("BOOKING_LUNCH_START", defaults.lunch_start),
            lunch_end: env_time("BOOKING_LUNCH_END", defaults.lunch_end),
            availability_rate: env_parse("BOOKING_AVAILABILITY_RATE", defaults.availability_rate),
        };

        let config = Self { schedule };
        if let Err(e) = config.validate() {
            warn!("Environment configuration rejected ({}), using defaults", e);
            return Self::default();
        }
        config
    }

    /// Parse a JSON document. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.schedule.validate()
    }
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn env_time(key: &str, default: NaiveTime) -> NaiveTime {
    match env::var(key) {
        Ok(raw) => match NaiveTime::parse_from_str(raw.trim(), hhmm::FORMAT) {
            Ok(value) => value,
            Err(_) => {
                warn!("{} is not a valid HH:MM time ({:?}), using default", key, raw);
                default
            }
        },
        Err(_) => default,
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} could not be parsed ({:?}), using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}

/// Serde adapter for `"HH:MM"` times.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = WizardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.schedule.slots_per_day(), 21);
    }

    #[test]
    fn test_lunch_window() {
        let config = ScheduleConfig::default();
        assert!(!config.is_lunch(time(11, 30)));
        assert!(config.is_lunch(time(12, 0)));
        assert!(config.is_lunch(time(13, 30)));
        assert!(!config.is_lunch(time(14, 0)));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WizardConfig::from_json_str(
            r#"{"schedule": {"opening": "09:00", "availability_rate": 1.0}}"#,
        )
        .unwrap();

        assert_eq!(config.schedule.opening, time(9, 0));
        assert_eq!(config.schedule.closing, time(18, 0));
        assert_eq!(config.schedule.availability_rate, 1.0);
    }

    #[test]
    fn test_invalid_json_values_rejected() {
        let err = WizardConfig::from_json_str(r#"{"schedule": {"opening": "9h"}}"#);
        assert!(matches!(err, Err(ConfigError::Json(_))));

        let err = WizardConfig::from_json_str(
            r#"{"schedule": {"opening": "19:00", "closing": "18:00"}}"#,
        );
        assert!(matches!(err, Err(ConfigError::Invalid(_))));

        let err = WizardConfig::from_json_str(r#"{"schedule": {"slot_minutes": 0}}"#);
        assert!(matches!(err, Err(ConfigError::Invalid(_))));

        let err = WizardConfig::from_json_str(r#"{"schedule": {"availability_rate": 1.5}}"#);
        assert!(matches!(err, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_serialized_times_use_hhmm() {
        let json = serde_json::to_string(&WizardConfig::default()).unwrap();
        assert!(json.contains("\"opening\":\"08:00\""));
        assert!(json.contains("\"lunch_end\":\"14:00\""));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"schedule": {{"slot_minutes": 15}}}}"#).unwrap();

        let config = WizardConfig::from_file(file.path()).unwrap();
        assert_eq!(config.schedule.slot_minutes, 15);
        assert_eq!(config.schedule.slots_per_day(), 41);
    }

    #[test]
    fn test_missing_file() {
        let result = WizardConfig::from_file("/nonexistent/booking.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
