//! Snapshot tests for the serialized output shape.
//!
//! The review UI and the import call consume this JSON directly, so field
//! names and formats must stay stable. If a change is intentional, update
//! snapshots with: `cargo insta review`

use calimport_core::{CalendarImporter, ImportConfig};
use insta::assert_json_snapshot;

fn importer() -> CalendarImporter {
    let config = ImportConfig::default()
        .with_reference_date("2026-10-16")
        .unwrap();
    CalendarImporter::with_config(config)
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn test_snapshot_google_calendar_report() {
    let report = importer().analyze("12\nNov. 2025, Sex\n16:00 - 17:00\nConsulta");

    assert_json_snapshot!(report, @r###"
    {
      "candidates": [
        {
          "title": "Consulta",
          "date": "2025-11-12",
          "time": "16:00",
          "type": "session"
        }
      ],
      "pass": "structured",
      "lines": 4,
      "duplicates_removed": 0
    }
    "###);
}

#[test]
fn test_snapshot_fallback_report() {
    let report = importer().analyze("Dentist 15/01/2026\nCall Rui 18:45\nbuy paper");

    assert_json_snapshot!(report, @r###"
    {
      "candidates": [
        {
          "title": "Dentist",
          "date": "2026-01-15",
          "time": "09:00",
          "type": "session"
        },
        {
          "title": "Call Rui",
          "date": "2026-10-16",
          "time": "18:45",
          "type": "session"
        }
      ],
      "pass": "fallback",
      "lines": 3,
      "duplicates_removed": 0
    }
    "###);
}

#[test]
fn test_snapshot_nothing_detected() {
    let report = importer().analyze("nothing to see here");

    assert_json_snapshot!(report, @r###"
    {
      "candidates": [],
      "pass": "none",
      "lines": 1,
      "duplicates_removed": 0
    }
    "###);
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_snapshot_default_config() {
    assert_json_snapshot!(ImportConfig::default(), @r###"
    {
      "default_title": "Session",
      "default_time": "09:00",
      "default_type": "session"
    }
    "###);
}
