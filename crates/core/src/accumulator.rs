//! Cross-line state for the structured pass.
//!
//! The accumulator is a plain value threaded through a fold over the
//! classified lines. Each [`Accumulator::step`] consumes the current state and
//! returns the next one together with the event it completed, if any.
//!
//! Month and year survive a flush because one calendar header covers many
//! day entries. Time and title belong to a single event and are cleared.

use chrono::NaiveTime;

use crate::types::{DateParts, Draft, LineKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    day: Option<u32>,
    month: Option<u32>,
    year: Option<i32>,
    time: Option<NaiveTime>,
    title: Option<String>,
}

impl Accumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A day number has been seen and not yet replaced.
    #[must_use]
    pub fn day_pending(&self) -> bool {
        self.day.is_some()
    }

    fn has_event_content(&self) -> bool {
        self.time.is_some() || self.title.is_some()
    }

    fn date_parts(&self) -> Option<DateParts> {
        Some(DateParts::new(self.day?, self.month?, self.year?))
    }

    /// Emit the pending event and clear time and title.
    ///
    /// Nothing is emitted unless day, month and year are all known and form a
    /// real calendar date.
    fn flush(self) -> (Self, Option<Draft>) {
        let draft = self.date_parts().and_then(|parts| {
            let date = parts.to_date();
            if date.is_none() {
                tracing::trace!(?parts, "dropping event with impossible date");
            }
            Some(Draft {
                date: date?,
                time: self.time,
                title: self.title.clone(),
            })
        });

        let next = Self {
            time: None,
            title: None,
            ..self
        };
        (next, draft)
    }

    /// Flush only when a new date starts while an event is still open.
    fn flush_before_new_date(self) -> (Self, Option<Draft>) {
        if self.day_pending() && self.has_event_content() {
            self.flush()
        } else {
            (self, None)
        }
    }

    fn with_date(self, parts: DateParts) -> Self {
        Self {
            day: Some(parts.day),
            month: Some(parts.month),
            year: Some(parts.year),
            ..self
        }
    }

    /// Apply one classified line.
    #[must_use]
    pub fn step(self, kind: LineKind) -> (Self, Option<Draft>) {
        match kind {
            LineKind::Day(day) => {
                let (state, emitted) = self.flush_before_new_date();
                (
                    Self {
                        day: Some(day),
                        ..state
                    },
                    emitted,
                )
            }
            LineKind::MonthYear { month, year } => (
                Self {
                    month: Some(month),
                    year: Some(year),
                    ..self
                },
                None,
            ),
            LineKind::TimeRange { start: time, .. } | LineKind::Time(time) => (
                Self {
                    time: Some(time),
                    ..self
                },
                None,
            ),
            LineKind::FullDate { date, time, title } => {
                let (state, emitted) = self.flush_before_new_date();
                let state = state.with_date(date);
                let next = Self {
                    time: time.or(state.time),
                    title: title.or(state.title),
                    ..state
                };
                (next, emitted)
            }
            LineKind::IsoDate(date) => {
                let (state, emitted) = self.flush_before_new_date();
                (state.with_date(date), emitted)
            }
            LineKind::Weekday => (self, None),
            LineKind::Title(text) => {
                // A second title after a timed event starts a new event on the same day.
                let (state, emitted) = if self.title.is_some() && self.time.is_some() {
                    self.flush()
                } else {
                    (self, None)
                };
                let title = match state.title {
                    Some(ref existing) => format!("{existing} {text}"),
                    None => text,
                };
                (
                    Self {
                        title: Some(title),
                        ..state
                    },
                    emitted,
                )
            }
            LineKind::Combined(draft) => (self, Some(draft)),
        }
    }

    /// Final flush after the last line.
    #[must_use]
    pub fn finish(self) -> Option<Draft> {
        self.flush().1
    }
}
