//! Free text following a pending day.
//!
//! Once a day number is pending, any line no earlier rule claimed is part of an
//! event title, except lines that only name a weekday.

use crate::lexicon::is_weekday_token;
use crate::rule::{Gate, LineRule, RuleInfo};
use crate::types::LineKind;

pub struct TitleRule;

impl LineRule for TitleRule {
    fn id(&self) -> &'static str {
        "title"
    }

    fn name(&self) -> &'static str {
        "Event title"
    }

    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: self.id(),
            name: self.name(),
            description: "Any other line while a day is pending; weekday-only lines are skipped",
            examples: &["Consulta", "Sessão de grupo"],
        }
    }

    fn gate(&self) -> Gate {
        Gate::DayPending
    }

    fn classify(&self, line: &str) -> Option<LineKind> {
        if is_weekday_token(line) {
            return Some(LineKind::Weekday);
        }
        Some(LineKind::Title(line.to_string()))
    }
}
