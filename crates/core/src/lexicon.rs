//! Portuguese month and weekday names.
//!
//! Calendar exports in pt-PT/pt-BR write months as full names (`novembro`),
//! three-letter abbreviations (`nov`, `Nov.`) or truncated forms OCR leaves
//! behind (`novemb`). Weekday tokens show up next to day numbers and must not
//! be mistaken for event titles.

const MONTHS: &[(&str, u32)] = &[
    ("janeiro", 1),
    ("fevereiro", 2),
    ("março", 3),
    ("marco", 3),
    ("abril", 4),
    ("maio", 5),
    ("junho", 6),
    ("julho", 7),
    ("agosto", 8),
    ("setembro", 9),
    ("outubro", 10),
    ("novembro", 11),
    ("dezembro", 12),
];

const MONTH_ABBREVIATIONS: &[(&str, u32)] = &[
    ("jan", 1),
    ("fev", 2),
    ("mar", 3),
    ("abr", 4),
    ("mai", 5),
    ("jun", 6),
    ("jul", 7),
    ("ago", 8),
    ("set", 9),
    ("out", 10),
    ("nov", 11),
    ("dez", 12),
];

const WEEKDAYS: &[&str] = &[
    "domingo",
    "segunda",
    "segunda-feira",
    "terça",
    "terça-feira",
    "terca",
    "terca-feira",
    "quarta",
    "quarta-feira",
    "quinta",
    "quinta-feira",
    "sexta",
    "sexta-feira",
    "sábado",
    "sabado",
    "dom",
    "seg",
    "ter",
    "qua",
    "qui",
    "sex",
    "sáb",
    "sab",
];

fn clean_token(token: &str) -> String {
    token.trim().replace('.', "").trim().to_lowercase()
}

/// Resolve a month name or abbreviation to its number (1-12).
///
/// Full names are tried first, then the first three letters of the token.
#[must_use]
pub fn resolve_month(token: &str) -> Option<u32> {
    let cleaned = clean_token(token);
    if cleaned.is_empty() {
        return None;
    }

    if let Some(&(_, month)) = MONTHS.iter().find(|(name, _)| *name == cleaned) {
        return Some(month);
    }

    let prefix: String = cleaned.chars().take(3).collect();
    MONTH_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == prefix)
        .map(|&(_, month)| month)
}

/// Check whether a token is only a weekday name (`Sex`, `sexta-feira`, `Sáb.`).
#[must_use]
pub fn is_weekday_token(token: &str) -> bool {
    let cleaned = clean_token(token);
    WEEKDAYS.contains(&cleaned.as_str())
}
