//! Summary of one payroll run.

use serde::{Deserialize, Serialize};

/// Counters collected while processing shifts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Accepted shifts returned by the fetch.
    pub shifts_fetched: usize,
    /// Shifts marked handled.
    pub shifts_handled: usize,
    /// Payroll rows created.
    pub entries_created: usize,
    /// Employees skipped because a row for the date already existed.
    pub employees_skipped: usize,
    /// Rows written with placeholder name and rate.
    pub degraded_lookups: usize,
    /// The unstaffed shift that ended the run early, if any.
    pub stopped_at_shift: Option<String>,
}

impl RunSummary {
    /// Returns true if an unstaffed shift ended the run before all fetched
    /// shifts were processed.
    pub fn stopped_early(&self) -> bool {
        self.stopped_at_shift.is_some()
    }
}
