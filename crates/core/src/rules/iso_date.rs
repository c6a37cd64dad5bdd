//! ISO `YYYY-MM-DD` date at the start of a line.
//!
//! Anything after the date is ignored; times and titles come from the lines
//! that follow.

use regex::Regex;
use std::sync::OnceLock;

use crate::rule::{LineRule, RuleInfo};
use crate::types::{DateParts, LineKind};

pub struct IsoDateRule;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})\b").unwrap())
}

impl LineRule for IsoDateRule {
    fn id(&self) -> &'static str {
        "iso-date"
    }

    fn name(&self) -> &'static str {
        "ISO date"
    }

    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: self.id(),
            name: self.name(),
            description: "YYYY-MM-DD date; time and title are taken from the following lines",
            examples: &["2025-12-05"],
        }
    }

    fn classify(&self, line: &str) -> Option<LineKind> {
        let caps = pattern().captures(line)?;
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        Some(LineKind::IsoDate(DateParts::new(day, month, year)))
    }
}
