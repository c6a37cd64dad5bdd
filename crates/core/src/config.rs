//! Importer configuration: the defaults applied to every emitted candidate.

use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::{hhmm, AppointmentCandidate, Draft};

pub const DEFAULT_TITLE: &str = "Session";
pub const DEFAULT_TYPE: &str = "session";
pub const DEFAULT_TIME: &str = "09:00";

/// Errors raised when building an [`ImportConfig`].
///
/// Parsing itself never fails; only invalid defaults are rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("default title must not be empty")]
    EmptyTitle,

    #[error("default session type must not be empty")]
    EmptyType,

    #[error("invalid default time '{0}' (expected HH:MM)")]
    InvalidTime(String),

    #[error("invalid reference date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Defaults applied when a line didn't carry a title or time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub default_title: String,
    #[serde(with = "hhmm")]
    pub default_time: NaiveTime,
    pub default_type: String,
    /// Date used by the fallback pass for lines with a time but no date.
    /// `None` means the local current date at parse time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_string(),
            default_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            default_type: DEFAULT_TYPE.to_string(),
            reference_date: None,
        }
    }
}

impl ImportConfig {
    /// Set the default title.
    pub fn with_default_title(mut self, title: &str) -> Result<Self, ConfigError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        self.default_title = title.to_string();
        Ok(self)
    }

    /// Set the default time from an `HH:MM` string.
    pub fn with_default_time(mut self, time: &str) -> Result<Self, ConfigError> {
        self.default_time =
            hhmm::parse(time).ok_or_else(|| ConfigError::InvalidTime(time.to_string()))?;
        Ok(self)
    }

    /// Set the default session type.
    pub fn with_default_type(mut self, kind: &str) -> Result<Self, ConfigError> {
        let kind = kind.trim();
        if kind.is_empty() {
            return Err(ConfigError::EmptyType);
        }
        self.default_type = kind.to_string();
        Ok(self)
    }

    /// Pin the fallback pass's "today" from a `YYYY-MM-DD` string.
    pub fn with_reference_date(mut self, date: &str) -> Result<Self, ConfigError> {
        let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| ConfigError::InvalidDate(date.to_string()))?;
        self.reference_date = Some(parsed);
        Ok(self)
    }

    /// The date the fallback pass uses for undated lines.
    #[must_use]
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Fill in defaults and turn a draft into a candidate.
    #[must_use]
    pub fn candidate(&self, draft: Draft) -> AppointmentCandidate {
        let title = draft
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| self.default_title.clone());
        AppointmentCandidate::new(
            title,
            draft.date,
            draft.time.unwrap_or(self.default_time),
            self.default_type.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ImportConfig::default();
        assert_eq!(config.default_title, "Session");
        assert_eq!(config.default_time.format("%H:%M").to_string(), DEFAULT_TIME);
        assert_eq!(config.default_type, "session");
    }

    #[test]
    fn test_builders_reject_bad_values() {
        assert_eq!(
            ImportConfig::default().with_default_title("  "),
            Err(ConfigError::EmptyTitle)
        );
        assert_eq!(
            ImportConfig::default().with_default_time("9h"),
            Err(ConfigError::InvalidTime("9h".into()))
        );
        assert_eq!(
            ImportConfig::default().with_default_type(""),
            Err(ConfigError::EmptyType)
        );
        assert!(ImportConfig::default()
            .with_reference_date("16/10/2026")
            .is_err());
    }

    #[test]
    fn test_candidate_applies_defaults() {
        let config = ImportConfig::default()
            .with_default_time("8:30")
            .unwrap()
            .with_default_title("Consulta")
            .unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 12, 5).unwrap();
        let candidate = config.candidate(Draft {
            date,
            time: None,
            title: None,
        });
        assert_eq!(candidate.title, "Consulta");
        assert_eq!(candidate.time_hhmm(), "08:30");
        assert_eq!(candidate.kind, "session");
    }

    #[test]
    fn test_partial_config_deserializes() {
        let config: ImportConfig =
            serde_json::from_str(r#"{"default_time":"10:15","reference_date":"2026-10-16"}"#)
                .unwrap();
        assert_eq!(config.default_title, "Session");
        assert_eq!(config.default_time, NaiveTime::from_hms_opt(10, 15, 0).unwrap());
        assert_eq!(
            config.reference_date(),
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InvalidTime("25:00".into()).to_string(),
            "invalid default time '25:00' (expected HH:MM)"
        );
    }
}
