//! Terminal rendering for reports, rule listings and line traces.
//!
//! Colors go through `colored`, so `colored::control::set_override(false)`
//! in `main` turns all of them off at once.

use calimport_core::{AppointmentCandidate, ImportReport, LineKind, LineTrace, RuleInfo};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// Shown when neither pass found anything. Not an error.
pub const NOTHING_DETECTED: &str = "Nothing detected, please check the formatting";

/// Pad `s` to `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(used)))
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(UnicodeWidthStr::width(header)))
        .max()
        .unwrap_or(0)
}

/// Render the candidate table shown before the user confirms an import.
pub fn candidate_table(report: &ImportReport) -> String {
    let rows: Vec<[String; 4]> = report.candidates.iter().map(row).collect();
    let widths: Vec<usize> = ["DATE", "TIME", "TITLE"]
        .iter()
        .enumerate()
        .map(|(i, header)| column_width(header, rows.iter().map(|r| r[i].as_str())))
        .collect();

    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}  {}  {}\n",
        pad("DATE", widths[0]).bold(),
        pad("TIME", widths[1]).bold(),
        pad("TITLE", widths[2]).bold(),
        "TYPE".bold()
    ));

    for [date, time, title, kind] in &rows {
        out.push_str(&format!(
            "{}  {}  {}  {}\n",
            pad(date, widths[0]).cyan(),
            pad(time, widths[1]).yellow(),
            pad(title, widths[2]),
            kind.dimmed()
        ));
    }

    out.push_str(&summary_line(report));
    out
}

fn row(candidate: &AppointmentCandidate) -> [String; 4] {
    [
        candidate.date.to_string(),
        candidate.time_hhmm(),
        candidate.title.clone(),
        candidate.kind.clone(),
    ]
}

fn summary_line(report: &ImportReport) -> String {
    let count = report.candidates.len();
    let noun = if count == 1 { "candidate" } else { "candidates" };
    let mut line = format!("\n{} {} ({} pass", count, noun, report.pass);
    match report.duplicates_removed {
        0 => {}
        1 => line.push_str(", 1 duplicate removed"),
        n => line.push_str(&format!(", {} duplicates removed", n)),
    }
    line.push(')');
    format!("{}\n", line.dimmed())
}

/// Render the `--rules` listing.
pub fn rule_list(infos: &[RuleInfo]) -> String {
    let mut out = format!("{}\n\n", "Line rules, in precedence order:".bold());
    for (i, info) in infos.iter().enumerate() {
        out.push_str(&format!(
            "{} {:>2}. {} {}\n",
            "▶".blue(),
            i + 1,
            info.name.bold(),
            format!("({})", info.id).yellow()
        ));
        out.push_str(&format!("      {}\n", info.description));
        if !info.examples.is_empty() {
            let examples = info
                .examples
                .iter()
                .map(|e| format!("\"{}\"", e))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("      {} {}\n", "e.g.".dimmed(), examples.dimmed()));
        }
    }
    out
}

/// Short human description of a classified line.
pub fn describe(kind: &LineKind) -> String {
    let hhmm = |t: &chrono::NaiveTime| t.format("%H:%M").to_string();
    match kind {
        LineKind::Day(day) => format!("day {}", day),
        LineKind::MonthYear { month, year } => format!("month {} of {}", month, year),
        LineKind::TimeRange { start, end } => format!("time {} (until {})", hhmm(start), hhmm(end)),
        LineKind::Time(time) => format!("time {}", hhmm(time)),
        LineKind::FullDate { date, time, title } => {
            let mut s = format!("date {:02}/{:02}/{}", date.day, date.month, date.year);
            if let Some(time) = time {
                s.push_str(&format!(" at {}", hhmm(time)));
            }
            if let Some(title) = title {
                s.push_str(&format!(" \"{}\"", title));
            }
            s
        }
        LineKind::IsoDate(date) => format!("date {}-{:02}-{:02}", date.year, date.month, date.day),
        LineKind::Weekday => "weekday (ignored)".to_string(),
        LineKind::Title(text) => format!("title \"{}\"", text),
        LineKind::Combined(draft) => {
            let mut s = format!("event on {}", draft.date);
            if let Some(time) = draft.time {
                s.push_str(&format!(" at {}", hhmm(&time)));
            }
            if let Some(title) = &draft.title {
                s.push_str(&format!(" \"{}\"", title));
            }
            s
        }
    }
}

/// Render the `--explain` trace, one line per input line.
pub fn explain(traces: &[LineTrace]) -> String {
    let width = column_width("", traces.iter().map(|t| t.line.as_str())).min(40);
    let mut out = String::new();
    for trace in traces {
        let line = pad(&trace.line, width);
        match (&trace.rule, &trace.kind) {
            (Some(rule), Some(kind)) => {
                let marker = if trace.emitted {
                    format!(" {}", "+ event".green())
                } else {
                    String::new()
                };
                out.push_str(&format!(
                    "{}  {} {} {}{}\n",
                    line,
                    "→".cyan(),
                    rule.yellow(),
                    describe(kind).dimmed(),
                    marker
                ));
            }
            _ => {
                out.push_str(&format!("{}  {} {}\n", line, "→".cyan(), "unclassified".dimmed()));
            }
        }
    }
    out
}
