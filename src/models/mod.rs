//! Core data models for the shift payroll job.
//!
//! Shifts and employees are read from Notion pages; payroll drafts are
//! turned into create requests for the payroll database.

mod employee;
mod payroll_entry;
mod run_summary;
mod shift;

pub use employee::{Employee, EmployeeLookup};
pub use payroll_entry::{PayrollDraft, PayrollEntry};
pub use run_summary::RunSummary;
pub use shift::{Shift, ShiftStatus};
