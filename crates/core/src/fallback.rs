//! Per-line extraction used when the structured pass finds nothing.
//!
//! Every line is treated on its own: a `D/M/YYYY` date and an `H:MM` time are
//! pulled out wherever they appear and the leftover text becomes the title.
//! Lines without any date or time are skipped even when they carry text.

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

use crate::normalize::{collapse_whitespace, lines};
use crate::types::{hhmm, DateParts, Draft};

/// Lines this short can't hold a date, time and title.
const MIN_LINE_CHARS: usize = 3;
const MIN_TITLE_CHARS: usize = 2;

struct Patterns {
    date: Regex,
    time: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        date: Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{4})").unwrap(),
        time: Regex::new(r"(\d{1,2}):(\d{2})(?:h\b)?").unwrap(),
    })
}

fn find_date(line: &str) -> Option<(NaiveDate, std::ops::Range<usize>)> {
    let caps = patterns().date.captures(line)?;
    let parts = DateParts::new(
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    );
    Some((parts.to_date()?, caps.get(0)?.range()))
}

/// First clock value on the line that is a real time.
fn find_time(line: &str) -> Option<NaiveTime> {
    patterns()
        .time
        .captures_iter(line)
        .find_map(|caps| hhmm::from_parts(&caps[1], &caps[2]))
}

fn remove_span(text: &str, span: std::ops::Range<usize>) -> String {
    format!("{} {}", &text[..span.start], &text[span.end..])
}

/// Extract a draft from one trimmed line.
pub(crate) fn extract_line(line: &str, reference_date: NaiveDate) -> Option<Draft> {
    if line.chars().count() < MIN_LINE_CHARS {
        return None;
    }

    let mut rest = line.to_string();
    let date = find_date(&rest).map(|(date, span)| {
        rest = remove_span(&rest, span);
        date
    });
    // Range ends are clock times too; none of them belong in the title.
    let time = find_time(&rest);
    if time.is_some() {
        rest = patterns().time.replace_all(&rest, " ").into_owned();
    }

    if date.is_none() && time.is_none() {
        return None;
    }

    let title = collapse_whitespace(&rest.replace('-', " "));
    if title.chars().count() < MIN_TITLE_CHARS {
        return None;
    }

    Some(Draft {
        date: date.unwrap_or(reference_date),
        time,
        title: Some(title),
    })
}

/// Run the fallback over normalized text.
pub fn extract(text: &str, reference_date: NaiveDate) -> Vec<Draft> {
    lines(text)
        .filter_map(|line| extract_line(line, reference_date))
        .collect()
}
