//! Line rule trait definition.

use crate::types::LineKind;

/// Metadata about a rule for help/documentation.
#[derive(Debug, Clone)]
pub struct RuleInfo {
    /// Unique identifier (e.g., "day-only")
    pub id: &'static str,
    /// Human-readable name (e.g., "Day number")
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Example lines
    pub examples: &'static [&'static str],
}

/// When a rule is allowed to run, relative to the accumulator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Tested on every line.
    Always,
    /// Only while a day number is pending.
    DayPending,
    /// Only while no day number is pending.
    NoDayPending,
}

/// One entry in the ordered classifier table.
///
/// Rules only look at a single trimmed, non-empty line. Everything that
/// depends on earlier lines lives in the accumulator; the only context a rule
/// sees is its [`Gate`].
pub trait LineRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Get rule metadata for help/documentation.
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: self.id(),
            name: self.name(),
            description: "",
            examples: &[],
        }
    }

    fn gate(&self) -> Gate {
        Gate::Always
    }

    /// Try to recognize the line.
    fn classify(&self, line: &str) -> Option<LineKind>;

    /// Check whether the rule may run given the accumulator state.
    fn applies(&self, day_pending: bool) -> bool {
        match self.gate() {
            Gate::Always => true,
            Gate::DayPending => day_pending,
            Gate::NoDayPending => !day_pending,
        }
    }
}
