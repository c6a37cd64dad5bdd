//! Core types for calimport.
//!
//! [`AppointmentCandidate`] is what callers receive. [`LineKind`] and [`Draft`]
//! are the intermediate values that line rules hand to the accumulator.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// An extracted appointment awaiting human review.
///
/// Every field the parser is responsible for is always filled in: `title`,
/// `time` and `kind` take the configured defaults when nothing was captured.
/// The optional reviewer fields are never set by the parser; the review step
/// fills them in before persisting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentCandidate {
    pub title: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Serialized as zero-padded 24-hour `HH:MM`.
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    /// Session type tag, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub therapist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AppointmentCandidate {
    /// Create a candidate with the reviewer fields left empty.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date,
            time,
            kind: kind.into(),
            therapist: None,
            manual_client_id: None,
            status: None,
            color: None,
            notes: None,
        }
    }

    /// The (date, time, title) key duplicates are detected on.
    #[must_use]
    pub fn identity(&self) -> (NaiveDate, NaiveTime, &str) {
        (self.date, self.time, self.title.as_str())
    }

    /// `HH:MM` rendering of the start time.
    #[must_use]
    pub fn time_hhmm(&self) -> String {
        self.time.format(hhmm::FORMAT).to_string()
    }
}

impl fmt::Display for AppointmentCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.time_hhmm(),
            self.title
        )
    }
}

/// Day, month and year as read from the text, not yet validated.
///
/// Validation happens when the date is turned into a [`NaiveDate`]: a line
/// like `31/02/2025` still classifies as a date, but never produces a
/// candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl DateParts {
    #[must_use]
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Resolve to a calendar date, `None` if the parts don't form one.
    #[must_use]
    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// A complete event before defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub title: Option<String>,
}

/// What a line rule recognized on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A bare day number (`12`).
    Day(u32),
    /// A calendar header (`Nov. 2025, Sex`).
    MonthYear { month: u32, year: i32 },
    /// `16:00 - 17:00`. Only `start` reaches the candidate.
    TimeRange { start: NaiveTime, end: NaiveTime },
    /// `16:00`
    Time(NaiveTime),
    /// `03/12/2025 [time] [title]`
    FullDate {
        date: DateParts,
        time: Option<NaiveTime>,
        title: Option<String>,
    },
    /// `2025-12-05`
    IsoDate(DateParts),
    /// A line that only names a weekday; ignored.
    Weekday,
    /// Free text that belongs to the pending event's title.
    Title(String),
    /// A self-contained event on one line.
    Combined(Draft),
}

/// Which pass produced the final candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePass {
    Structured,
    Fallback,
    /// Neither pass found anything.
    None,
}

impl fmt::Display for ParsePass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Structured => "structured",
            Self::Fallback => "fallback",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

/// Result of analyzing one block of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub candidates: Vec<AppointmentCandidate>,
    pub pass: ParsePass,
    /// Non-empty lines after normalization.
    pub lines: usize,
    pub duplicates_removed: usize,
}

impl ImportReport {
    /// True when nothing was detected. This is an informational outcome,
    /// not an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Serde helpers for `HH:MM` clock times.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    /// Build a time from hour and minute digit strings (`9`, `05`).
    #[must_use]
    pub fn from_parts(hour: &str, minute: &str) -> Option<NaiveTime> {
        let hour: u32 = hour.parse().ok()?;
        let minute: u32 = minute.parse().ok()?;
        NaiveTime::from_hms_opt(hour, minute, 0)
    }

    /// Parse `H:MM` or `HH:MM`.
    #[must_use]
    pub fn parse(s: &str) -> Option<NaiveTime> {
        let (hour, minute) = s.trim().split_once(':')?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return None;
        }
        if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        from_parts(hour, minute)
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid HH:MM time: {s}")))
    }
}
