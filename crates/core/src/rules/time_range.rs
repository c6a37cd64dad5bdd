//! Start-end time range on its own line (`16:00 - 17:00`).

use regex::Regex;
use std::sync::OnceLock;

use crate::rule::{LineRule, RuleInfo};
use crate::types::{hhmm, LineKind};

pub struct TimeRangeRule;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{1,2}):(\d{2})h?\s*-\s*(\d{1,2}):(\d{2})h?$").unwrap())
}

impl LineRule for TimeRangeRule {
    fn id(&self) -> &'static str {
        "time-range"
    }

    fn name(&self) -> &'static str {
        "Time range"
    }

    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: self.id(),
            name: self.name(),
            description: "Start and end time; the start becomes the appointment time",
            examples: &["16:00 - 17:00", "9:30-10:15"],
        }
    }

    fn classify(&self, line: &str) -> Option<LineKind> {
        let caps = pattern().captures(line)?;
        let start = hhmm::from_parts(&caps[1], &caps[2])?;
        let end = hhmm::from_parts(&caps[3], &caps[4])?;
        Some(LineKind::TimeRange { start, end })
    }
}
