//! Month/year header, optionally followed by a weekday.
//!
//! Matches `Nov. 2025, Sex`, `novembro 2025` and `dez 2025, sábado`. The
//! weekday is ignored; the day number comes from a separate line.

use regex::Regex;
use std::sync::OnceLock;

use crate::lexicon::resolve_month;
use crate::rule::{LineRule, RuleInfo};
use crate::types::LineKind;

pub struct MonthHeaderRule;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\p{L}+)\.?\s+(\d{4})(?:\s*,\s*(\p{L}+(?:-\p{L}+)?)\.?)?$").unwrap()
    })
}

impl LineRule for MonthHeaderRule {
    fn id(&self) -> &'static str {
        "month-header"
    }

    fn name(&self) -> &'static str {
        "Month header"
    }

    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: self.id(),
            name: self.name(),
            description: "Month name and year, with an optional trailing weekday",
            examples: &["Nov. 2025, Sex", "dezembro 2025"],
        }
    }

    fn classify(&self, line: &str) -> Option<LineKind> {
        let caps = pattern().captures(line)?;
        let month = resolve_month(&caps[1])?;
        let year: i32 = caps[2].parse().ok()?;
        Some(LineKind::MonthYear { month, year })
    }
}
