//! calimport core
//!
//! Turns pasted calendar text (Google Calendar printouts, PDF or Word agendas,
//! hand-written notes) into a deduplicated list of appointment candidates for
//! human review. Parsing never fails: text the rules don't understand is
//! skipped, and an empty list means "nothing detected".
//!
//! # Quick Start
//!
//! ```
//! use calimport_core::CalendarImporter;
//!
//! let importer = CalendarImporter::new();
//! let candidates = importer.parse("12\nNov. 2025, Sex\n16:00 - 17:00\nConsulta");
//!
//! assert_eq!(candidates.len(), 1);
//! assert_eq!(candidates[0].title, "Consulta");
//! assert_eq!(candidates[0].date.to_string(), "2025-11-12");
//! assert_eq!(candidates[0].time_hhmm(), "16:00");
//! ```
//!
//! # Passes
//!
//! The structured pass feeds every line through an ordered rule table and a
//! cross-line accumulator. Only when it finds nothing does the fallback pass
//! look at each line on its own.
//!
//! ```
//! use calimport_core::{CalendarImporter, ImportConfig, ParsePass};
//!
//! let config = ImportConfig::default().with_reference_date("2026-10-16").unwrap();
//! let importer = CalendarImporter::with_config(config);
//!
//! let report = importer.analyze("Consulta João 14:30");
//! assert_eq!(report.pass, ParsePass::Fallback);
//! assert_eq!(report.candidates[0].date.to_string(), "2026-10-16");
//! ```

pub mod accumulator;
pub mod config;
pub mod dedup;
pub mod fallback;
pub mod lexicon;
pub mod normalize;
pub mod rule;
pub mod rules;
pub mod types;

pub use accumulator::Accumulator;
pub use config::{ConfigError, ImportConfig};
pub use rule::{Gate, LineRule, RuleInfo};
pub use types::*;

use rules::{
    DateTimeDashTitleRule, DateTimeTitleRule, DayOnlyRule, FullDateRule, IsoDateRule,
    MonthHeaderRule, SimpleTimeRule, TimeRangeRule, TitleDashDateTimeRule, TitleRule,
};

/// How one line was classified during the structured pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTrace {
    pub line: String,
    /// Id of the rule that claimed the line, `None` when no rule did.
    pub rule: Option<&'static str>,
    pub kind: Option<LineKind>,
    /// Whether this line completed an event.
    pub emitted: bool,
}

/// Main entry point - a configured importer instance.
///
/// Holds no per-parse state, so one instance can serve any number of
/// concurrent parses.
pub struct CalendarImporter {
    rules: Vec<Box<dyn LineRule>>,
    config: ImportConfig,
}

impl CalendarImporter {
    /// Create an importer with the built-in rules and default config.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Self::create_rule_list(),
            config: ImportConfig::default(),
        }
    }

    /// Create an importer with custom configuration.
    #[must_use]
    pub fn with_config(config: ImportConfig) -> Self {
        Self {
            rules: Self::create_rule_list(),
            config,
        }
    }

    /// Set the configuration.
    #[must_use]
    pub fn set_config(mut self, config: ImportConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// The built-in rules, in precedence order.
    fn create_rule_list() -> Vec<Box<dyn LineRule>> {
        vec![
            // Context lines of multi-line agendas
            Box::new(DayOnlyRule),
            Box::new(MonthHeaderRule),
            Box::new(TimeRangeRule),
            Box::new(SimpleTimeRule),
            // Dated lines
            Box::new(FullDateRule),
            Box::new(IsoDateRule),
            // Only while a day is pending
            Box::new(TitleRule),
            // Only while no day is pending
            Box::new(TitleDashDateTimeRule),
            Box::new(DateTimeDashTitleRule),
            Box::new(DateTimeTitleRule),
        ]
    }

    /// Classify one trimmed line. Returns the claiming rule's id and what it
    /// recognized, or `None` for an unclassified line.
    #[must_use]
    pub fn classify_line(&self, line: &str, day_pending: bool) -> Option<(&'static str, LineKind)> {
        self.rules
            .iter()
            .filter(|rule| rule.applies(day_pending))
            .find_map(|rule| rule.classify(line).map(|kind| (rule.id(), kind)))
    }

    /// Fold the accumulator over every line, reporting each step to `on_line`.
    ///
    /// The flag is true when the end of input closed a pending event.
    fn run_structured(
        &self,
        text: &str,
        mut on_line: impl FnMut(LineTrace),
    ) -> (Vec<Draft>, bool) {
        let (state, mut drafts) = normalize::lines(text).fold(
            (Accumulator::new(), Vec::new()),
            |(state, mut drafts), line| {
                let Some((rule, kind)) = self.classify_line(line, state.day_pending()) else {
                    tracing::trace!(line, "unclassified");
                    on_line(LineTrace {
                        line: line.to_string(),
                        rule: None,
                        kind: None,
                        emitted: false,
                    });
                    return (state, drafts);
                };

                tracing::trace!(line, rule, "classified");
                let (next, emitted) = state.step(kind.clone());
                on_line(LineTrace {
                    line: line.to_string(),
                    rule: Some(rule),
                    kind: Some(kind),
                    emitted: emitted.is_some(),
                });
                drafts.extend(emitted);
                (next, drafts)
            },
        );
        let last = state.finish();
        let closed_at_end = last.is_some();
        drafts.extend(last);
        (drafts, closed_at_end)
    }

    fn structured_pass(&self, text: &str) -> Vec<Draft> {
        self.run_structured(text, |_| {}).0
    }

    /// Per-line classification of `text`, for diagnostics.
    #[must_use]
    pub fn explain(&self, text: &str) -> Vec<LineTrace> {
        let normalized = normalize::normalize(text);
        let mut traces = Vec::new();
        let (_, closed_at_end) = self.run_structured(&normalized, |trace| traces.push(trace));
        if closed_at_end {
            if let Some(last) = traces.iter_mut().rev().find(|t| t.rule.is_some()) {
                last.emitted = true;
            }
        }
        traces
    }

    /// Parse `text` and report which pass produced the candidates.
    #[must_use]
    pub fn analyze(&self, text: &str) -> ImportReport {
        let normalized = normalize::normalize(text);
        let lines = normalize::lines(&normalized).count();

        let mut pass = ParsePass::Structured;
        let mut drafts = self.structured_pass(&normalized);
        tracing::debug!(lines, found = drafts.len(), "structured pass done");

        if drafts.is_empty() {
            pass = ParsePass::Fallback;
            drafts = fallback::extract(&normalized, self.config.reference_date());
            tracing::debug!(found = drafts.len(), "fallback pass done");
        }

        let candidates: Vec<_> = drafts
            .into_iter()
            .map(|draft| self.config.candidate(draft))
            .collect();
        let before = candidates.len();
        let candidates = dedup::dedup(candidates);
        let duplicates_removed = before - candidates.len();

        if candidates.is_empty() {
            pass = ParsePass::None;
            tracing::debug!("nothing detected");
        } else if duplicates_removed > 0 {
            tracing::debug!(duplicates_removed, "removed duplicate candidates");
        }

        ImportReport {
            candidates,
            pass,
            lines,
            duplicates_removed,
        }
    }

    /// Parse `text` into appointment candidates.
    ///
    /// # Examples
    ///
    /// ```
    /// use calimport_core::CalendarImporter;
    ///
    /// let importer = CalendarImporter::new();
    /// let candidates = importer.parse("03/12/2025 10:00 - Sessão com João");
    /// assert_eq!(candidates[0].title, "Sessão com João");
    /// assert_eq!(candidates[0].time_hhmm(), "10:00");
    /// ```
    #[must_use]
    pub fn parse(&self, text: &str) -> Vec<AppointmentCandidate> {
        self.analyze(text).candidates
    }

    /// Get info about all registered rules, in precedence order.
    #[must_use]
    pub fn rule_infos(&self) -> Vec<RuleInfo> {
        self.rules.iter().map(|r| r.info()).collect()
    }

    #[must_use]
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

impl Default for CalendarImporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse with the default configuration.
#[must_use]
pub fn parse_calendar_text(text: &str) -> Vec<AppointmentCandidate> {
    CalendarImporter::new().parse(text)
}
