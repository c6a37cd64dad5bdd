//! Day number on its own line.
//!
//! Google Calendar's printed agenda puts the day of the month on a line by
//! itself, followed by the month header and the events of that day.

use crate::rule::{LineRule, RuleInfo};
use crate::types::LineKind;

pub struct DayOnlyRule;

impl LineRule for DayOnlyRule {
    fn id(&self) -> &'static str {
        "day-only"
    }

    fn name(&self) -> &'static str {
        "Day number"
    }

    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: self.id(),
            name: self.name(),
            description: "A line holding only a 1-2 digit day of the month",
            examples: &["12", "3"],
        }
    }

    fn classify(&self, line: &str) -> Option<LineKind> {
        if line.is_empty() || line.len() > 2 || !line.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        line.parse().ok().map(LineKind::Day)
    }
}
