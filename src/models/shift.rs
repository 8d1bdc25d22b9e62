//! Shift model and related types.
//!
//! A shift is a row of the shifts database: a dated work period with a
//! status and the employees who worked it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{ShiftProperties, StatusNames};
use crate::error::{SyncError, SyncResult};
use crate::notion::Page;

/// Lifecycle state of a shift as far as payroll is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftStatus {
    /// Approved and waiting for payroll.
    Accepted,
    /// Payroll has been written.
    Handled,
    /// Any other option of the status property.
    Other(String),
}

impl ShiftStatus {
    /// Interprets a status option name.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_payroll::config::StatusNames;
    /// use shift_payroll::models::ShiftStatus;
    ///
    /// let names = StatusNames::default();
    /// assert_eq!(ShiftStatus::from_name("Accepted", &names), ShiftStatus::Accepted);
    /// assert_eq!(
    ///     ShiftStatus::from_name("Draft", &names),
    ///     ShiftStatus::Other("Draft".to_string())
    /// );
    /// ```
    pub fn from_name(name: &str, names: &StatusNames) -> Self {
        if name == names.accepted {
            Self::Accepted
        } else if name == names.handled {
            Self::Handled
        } else {
            Self::Other(name.to_string())
        }
    }
}

/// A shift read from the shifts database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Page id of the shift.
    pub id: String,
    /// Current status.
    pub status: ShiftStatus,
    /// Calendar date of the shift.
    pub date: NaiveDate,
    /// Page ids of the on-shift employees, in the order listed.
    pub staff: Vec<String>,
}

impl Shift {
    /// Reads a shift from a database row.
    ///
    /// Fails with `InvalidRecord` when the date is empty or unparseable, or
    /// when the staff relation is absent. A missing status reads as an empty
    /// `Other`.
    pub fn from_page(
        page: &Page,
        properties: &ShiftProperties,
        statuses: &StatusNames,
    ) -> SyncResult<Self> {
        let invalid = |message: String| SyncError::InvalidRecord {
            record_id: page.id.clone(),
            message,
        };

        // The time of day is dropped: the payroll filter, payroll title and
        // shift title all use the bare calendar date.
        let date = match page.date_start(&properties.date) {
            Some(raw) => page
                .date(&properties.date)
                .ok_or_else(|| invalid(format!("{} '{}' is not a date", properties.date, raw)))?,
            None => return Err(invalid(format!("{} is empty", properties.date))),
        };

        let staff = page
            .relation_ids(&properties.staff)
            .ok_or_else(|| invalid(format!("{} relation is missing", properties.staff)))?;

        let status = ShiftStatus::from_name(
            page.status_name(&properties.status).unwrap_or_default(),
            statuses,
        );

        Ok(Self {
            id: page.id.clone(),
            status,
            date,
            staff,
        })
    }

    /// Returns true if at least one employee is assigned.
    pub fn has_staff(&self) -> bool {
        !self.staff.is_empty()
    }

    /// The date as written to payroll rows and the shift title.
    pub fn date_label(&self) -> String {
        self.date.to_string()
    }
}
