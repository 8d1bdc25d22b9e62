//! Configuration loading for the shift payroll job.
//!
//! Settings are read from environment variables; the column names of the
//! Notion databases can be overridden with a YAML property schema.
//!
//! # Example
//!
//! ```no_run
//! use shift_payroll::config::Settings;
//!
//! let settings = Settings::from_env().unwrap();
//! println!("Payroll database: {}", settings.payroll_database_id);
//! ```

mod loader;
mod types;

pub use loader::{
    ENV_API_KEY, ENV_API_URL, ENV_LOG_LEVEL, ENV_PAYROLL_DATABASE, ENV_SCHEMA_PATH,
    ENV_SHIFTS_DATABASE, ENV_TIMEOUT_SECS, log_filter, normalize_log_level,
};
pub use types::{
    DEFAULT_API_URL, DEFAULT_LOG_LEVEL, DEFAULT_TIMEOUT, EmployeeProperties, PayrollProperties,
    PropertySchema, Settings, ShiftProperties, StatusNames,
};
