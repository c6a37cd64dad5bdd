//! Input canonicalization.

const EN_DASH: char = '\u{2013}';
const EM_DASH: char = '\u{2014}';

/// Replace en/em dashes with `-` and collapse `\r\n` / `\r` to `\n`.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace([EN_DASH, EM_DASH], "-")
}

/// Trimmed, non-empty lines of already-normalized text.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(str::trim).filter(|l| !l.is_empty())
}

/// Collapse runs of whitespace to a single space and trim the ends.
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
