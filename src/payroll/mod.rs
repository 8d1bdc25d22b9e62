//! The payroll pipeline.
//!
//! Each operation is a function over a [`WorkspaceApi`] and a [`JobContext`]:
//! fetching accepted shifts, filtering out employees already paid for a
//! date, looking up employees, writing payroll rows and closing shifts.
//! [`run`] strings them together.
//!
//! [`WorkspaceApi`]: crate::notion::WorkspaceApi

mod dedup;
mod employee_lookup;
mod payroll_write;
mod run;
mod shift_fetch;
mod shift_update;

pub use dedup::{exclude_handled, filter_handled_employees, handled_employees_filter};
pub use employee_lookup::lookup_employee;
pub use payroll_write::create_payroll_entry;
pub use run::run;
pub use shift_fetch::{accepted_shifts_filter, fetch_accepted_shifts};
pub use shift_update::mark_shift_handled;

use crate::config::{PropertySchema, Settings};

/// Which databases to work on and how their columns are named.
#[derive(Debug, Clone)]
pub struct JobContext {
    /// Database holding shift records.
    pub shifts_database_id: String,
    /// Database holding payroll records.
    pub payroll_database_id: String,
    /// Column names of the databases.
    pub schema: PropertySchema,
}

impl JobContext {
    /// Creates a context using the default column names.
    pub fn new(shifts_database_id: impl Into<String>, payroll_database_id: impl Into<String>) -> Self {
        Self {
            shifts_database_id: shifts_database_id.into(),
            payroll_database_id: payroll_database_id.into(),
            schema: PropertySchema::default(),
        }
    }
}

impl From<&Settings> for JobContext {
    fn from(settings: &Settings) -> Self {
        Self {
            shifts_database_id: settings.shifts_database_id.clone(),
            payroll_database_id: settings.payroll_database_id.clone(),
            schema: settings.schema.clone(),
        }
    }
}
