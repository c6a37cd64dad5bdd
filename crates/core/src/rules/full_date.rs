//! `D/M/YYYY` date at the start of a line, with optional time and title.
//!
//! Handles the shapes exported from Word/PDF agendas:
//! - `03/12/2025`
//! - `03/12/2025 10:00`
//! - `03/12/2025 às 10:00 - 11:00 - Sessão com João`
//! - `3/12/2025 14:30 Avaliação Maria`

use regex::Regex;
use std::sync::OnceLock;

use crate::normalize::collapse_whitespace;
use crate::rule::{LineRule, RuleInfo};
use crate::types::{hhmm, DateParts, LineKind};

/// Titles this short are separator leftovers, not titles.
const MIN_TITLE_CHARS: usize = 3;

pub struct FullDateRule;

struct Patterns {
    date: Regex,
    time_range: Regex,
    time: Regex,
    leading_noise: Regex,
    connector_before_time: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        date: Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})\b(.*)$").unwrap(),
        // `10:00h` is a common way of writing a time
        time_range: Regex::new(r"(\d{1,2}):(\d{2})h?\s*-\s*\d{1,2}:\d{2}(?:h\b|\b)").unwrap(),
        time: Regex::new(r"\b(\d{1,2}):(\d{2})(?:h\b|\b)").unwrap(),
        // Separators and the "at" connector left between date, time and title
        leading_noise: Regex::new(r"(?i)^(?:\s|-|às\b|as\b|at\b)+").unwrap(),
        connector_before_time: Regex::new(r"(?i)(?:^|\s)(?:às|as|at)\s*$").unwrap(),
    })
}

/// Pull the first valid time (range start or plain time) out of `rest`.
///
/// Returns the time and `rest` with the matched span, and an `às`/`at`
/// connector right before it, removed.
fn take_time(rest: &str) -> (Option<chrono::NaiveTime>, String) {
    let patterns = patterns();
    for re in [&patterns.time_range, &patterns.time] {
        let found = re.captures_iter(rest).find_map(|caps| {
            let time = hhmm::from_parts(&caps[1], &caps[2])?;
            Some((time, caps.get(0)?.range()))
        });
        if let Some((time, span)) = found {
            let before = patterns
                .connector_before_time
                .replace(&rest[..span.start], "");
            let mut remaining = String::with_capacity(rest.len());
            remaining.push_str(&before);
            remaining.push(' ');
            remaining.push_str(&rest[span.end..]);
            return (Some(time), remaining);
        }
    }
    (None, rest.to_string())
}

/// Strip separators and connector words, keep the rest as a title.
fn clean_title(rest: &str) -> Option<String> {
    let stripped = patterns().leading_noise.replace(rest, "");
    let title = collapse_whitespace(stripped.trim_end_matches(|c: char| c == '-' || c.is_whitespace()));
    (title.chars().count() >= MIN_TITLE_CHARS).then_some(title)
}

impl LineRule for FullDateRule {
    fn id(&self) -> &'static str {
        "full-date"
    }

    fn name(&self) -> &'static str {
        "Full date"
    }

    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: self.id(),
            name: self.name(),
            description: "D/M/YYYY at the start of the line, optionally with a time and a title",
            examples: &[
                "03/12/2025",
                "03/12/2025 10:00 - Sessão com João",
                "3/12/2025 às 14:30 Avaliação Maria",
            ],
        }
    }

    fn classify(&self, line: &str) -> Option<LineKind> {
        let caps = patterns().date.captures(line)?;
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;

        let (time, rest) = take_time(&caps[4]);
        let title = clean_title(&rest);

        Some(LineKind::FullDate {
            date: DateParts::new(day, month, year),
            time,
            title,
        })
    }
}
