//! Configuration types for the shift payroll job.
//!
//! The property schema maps the job's concepts onto the column names of the
//! three Notion databases. It is deserialized from YAML, and every key is
//! optional so a file only needs to list the columns that differ.

use serde::Deserialize;
use std::time::Duration;

/// Default base URL of the Notion REST API.
pub const DEFAULT_API_URL: &str = "https://api.notion.com/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default log filter when `LOG_LEVEL` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bearer token of the Notion integration.
    pub api_key: String,
    /// Database holding shift records.
    pub shifts_database_id: String,
    /// Database holding payroll records.
    pub payroll_database_id: String,
    /// Base URL of the API, without trailing slash.
    pub api_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Property names of the three databases.
    pub schema: PropertySchema,
}

/// Property names used on shift records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShiftProperties {
    /// The status property.
    pub status: String,
    /// The date property.
    pub date: String,
    /// The relation to the employees on shift.
    pub staff: String,
    /// The title property, overwritten with the date once handled.
    pub title: String,
}

impl Default for ShiftProperties {
    fn default() -> Self {
        Self {
            status: "Status".to_string(),
            date: "Date".to_string(),
            staff: "On-shift staff".to_string(),
            title: "Name".to_string(),
        }
    }
}

/// Property names used on employee records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmployeeProperties {
    /// The title property holding the display name.
    pub name: String,
    /// The numeric pay rate property.
    pub rate: String,
}

impl Default for EmployeeProperties {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            rate: "Rate".to_string(),
        }
    }
}

/// Property names used on payroll records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollProperties {
    /// The title property.
    pub title: String,
    /// The relation to the paid employee.
    pub employee: String,
    /// The date property.
    pub date: String,
    /// The numeric rate property.
    pub rate: String,
    /// The relation to the originating shift.
    pub shift: String,
}

impl Default for PayrollProperties {
    fn default() -> Self {
        Self {
            title: "Name".to_string(),
            employee: "Employee".to_string(),
            date: "Date".to_string(),
            rate: "Daily rate".to_string(),
            shift: "Shift".to_string(),
        }
    }
}

/// Status option names on the shift status property.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatusNames {
    /// Shifts ready for payroll.
    pub accepted: String,
    /// Shifts whose payroll has been written.
    pub handled: String,
}

impl Default for StatusNames {
    fn default() -> Self {
        Self {
            accepted: "Accepted".to_string(),
            handled: "Handled".to_string(),
        }
    }
}

/// Column names of the shift, employee and payroll databases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PropertySchema {
    /// Shift database columns.
    pub shift: ShiftProperties,
    /// Employee database columns.
    pub employee: EmployeeProperties,
    /// Payroll database columns.
    pub payroll: PayrollProperties,
    /// Shift status options.
    pub statuses: StatusNames,
}
