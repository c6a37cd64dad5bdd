//! A single time on its own line.

use regex::Regex;
use std::sync::OnceLock;

use crate::rule::LineRule;
use crate::types::{hhmm, LineKind};

pub struct SimpleTimeRule;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{1,2}):(\d{2})h?$").unwrap())
}

impl LineRule for SimpleTimeRule {
    fn id(&self) -> &'static str {
        "simple-time"
    }

    fn name(&self) -> &'static str {
        "Time"
    }

    fn classify(&self, line: &str) -> Option<LineKind> {
        let caps = pattern().captures(line)?;
        hhmm::from_parts(&caps[1], &caps[2]).map(LineKind::Time)
    }
}
