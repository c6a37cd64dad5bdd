//! Single-line events: title, date and time together.
//!
//! Three orderings are recognized:
//! - `Consulta Ana - 03/12/2025 às 10:00`
//! - `03/12/2025 10:00 - Consulta Ana`
//! - `03/12/2025 10:00 Consulta Ana`
//!
//! These only run when no day is pending and emit a complete event at once.
//! The last two shapes also satisfy [`super::FullDateRule`], which has higher
//! precedence and yields the same event, so those two rules never fire in the
//! built-in table.

use chrono::NaiveTime;
use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::normalize::collapse_whitespace;
use crate::rule::{Gate, LineRule, RuleInfo};
use crate::types::{hhmm, DateParts, Draft, LineKind};

struct Patterns {
    title_dash_date_time: Regex,
    date_time_dash_title: Regex,
    date_time_title: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        title_dash_date_time: Regex::new(
            r"(?i)^(.+?)\s+-\s+(\d{1,2})/(\d{1,2})/(\d{4})(?:\s+(?:às|as|at))?\s+(\d{1,2}):(\d{2})h?$",
        )
        .unwrap(),
        date_time_dash_title: Regex::new(
            r"^(\d{1,2})/(\d{1,2})/(\d{4})\s+(\d{1,2}):(\d{2})\s*-\s*(.+)$",
        )
        .unwrap(),
        date_time_title: Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})\s+(\d{1,2}):(\d{2})\s+(.+)$")
            .unwrap(),
    })
}

/// Capture group indices for one ordering.
struct Layout {
    title: usize,
    day: usize,
    time: usize,
}

fn build(caps: &Captures<'_>, layout: &Layout) -> Option<LineKind> {
    let day: u32 = caps[layout.day].parse().ok()?;
    let month: u32 = caps[layout.day + 1].parse().ok()?;
    let year: i32 = caps[layout.day + 2].parse().ok()?;
    let date = DateParts::new(day, month, year).to_date()?;
    let time: NaiveTime = hhmm::from_parts(&caps[layout.time], &caps[layout.time + 1])?;

    let title = collapse_whitespace(&caps[layout.title]);
    if title.is_empty() {
        return None;
    }

    Some(LineKind::Combined(Draft {
        date,
        time: Some(time),
        title: Some(title),
    }))
}

/// `title - D/M/YYYY [at] H:MM`
pub struct TitleDashDateTimeRule;

impl LineRule for TitleDashDateTimeRule {
    fn id(&self) -> &'static str {
        "title-date-time"
    }

    fn name(&self) -> &'static str {
        "Title, date and time"
    }

    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: self.id(),
            name: self.name(),
            description: "Title, a dash, then the date and start time",
            examples: &["Consulta Ana - 03/12/2025 às 10:00"],
        }
    }

    fn gate(&self) -> Gate {
        Gate::NoDayPending
    }

    fn classify(&self, line: &str) -> Option<LineKind> {
        let caps = patterns().title_dash_date_time.captures(line)?;
        build(
            &caps,
            &Layout {
                title: 1,
                day: 2,
                time: 5,
            },
        )
    }
}

/// `D/M/YYYY H:MM - title`
pub struct DateTimeDashTitleRule;

impl LineRule for DateTimeDashTitleRule {
    fn id(&self) -> &'static str {
        "date-time-dash-title"
    }

    fn name(&self) -> &'static str {
        "Date, time, dash, title"
    }

    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: self.id(),
            name: self.name(),
            description: "Date and start time, a dash, then the title",
            examples: &["03/12/2025 10:00 - Consulta Ana"],
        }
    }

    fn gate(&self) -> Gate {
        Gate::NoDayPending
    }

    fn classify(&self, line: &str) -> Option<LineKind> {
        let caps = patterns().date_time_dash_title.captures(line)?;
        build(
            &caps,
            &Layout {
                title: 6,
                day: 1,
                time: 4,
            },
        )
    }
}

/// `D/M/YYYY H:MM title`
pub struct DateTimeTitleRule;

impl LineRule for DateTimeTitleRule {
    fn id(&self) -> &'static str {
        "date-time-title"
    }

    fn name(&self) -> &'static str {
        "Date, time, title"
    }

    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: self.id(),
            name: self.name(),
            description: "Date and start time followed directly by the title",
            examples: &["03/12/2025 10:00 Consulta Ana"],
        }
    }

    fn gate(&self) -> Gate {
        Gate::NoDayPending
    }

    fn classify(&self, line: &str) -> Option<LineKind> {
        let caps = patterns().date_time_title.captures(line)?;
        build(
            &caps,
            &Layout {
                title: 6,
                day: 1,
                time: 4,
            },
        )
    }
}
