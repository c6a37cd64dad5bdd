//! Order-preserving removal of repeated candidates.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};

use crate::types::AppointmentCandidate;

/// Drop every candidate whose (date, time, title) matches an earlier one.
#[must_use]
pub fn dedup(candidates: Vec<AppointmentCandidate>) -> Vec<AppointmentCandidate> {
    let mut seen: HashSet<(NaiveDate, NaiveTime, String)> = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| {
            let (date, time, title) = c.identity();
            seen.insert((date, time, title.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn c(day: u32, hour: u32, title: &str) -> AppointmentCandidate {
        AppointmentCandidate::new(
            title,
            NaiveDate::from_ymd_opt(2025, 12, day).unwrap(),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            "session",
        )
    }

    #[test]
    fn test_keeps_first_occurrence_in_order() {
        let input = vec![c(3, 10, "A"), c(4, 10, "B"), c(3, 10, "A"), c(3, 11, "A")];
        assert_eq!(dedup(input), vec![c(3, 10, "A"), c(4, 10, "B"), c(3, 11, "A")]);
    }

    #[test]
    fn test_type_is_not_part_of_identity() {
        let mut other = c(3, 10, "A");
        other.kind = "avaliacao".into();
        assert_eq!(dedup(vec![c(3, 10, "A"), other]).len(), 1);
    }

    #[test]
    fn test_reviewer_fields_are_not_part_of_identity() {
        let mut noted = c(3, 10, "A");
        noted.notes = Some("trazer exames".into());
        assert_eq!(noted.identity(), c(3, 10, "A").identity());
        assert_eq!(dedup(vec![c(3, 10, "A"), noted]), vec![c(3, 10, "A")]);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![c(3, 10, "A"), c(3, 10, "A"), c(5, 9, "C"), c(5, 9, "C")];
        let once = dedup(input);
        let twice = dedup(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty() {
        assert!(dedup(Vec::new()).is_empty());
    }
}
