//! Payroll entry model.
//!
//! One payroll row records that an employee is owed their flat rate for one
//! shift on one date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayrollProperties;
use crate::notion::{
    CreatePageRequest, date_value, optional_number_value, relation_value, title_value,
};

use super::{Employee, Shift};

/// A payroll row that has not been written yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollDraft {
    /// Page id of the paid employee.
    pub employee_id: String,
    /// Display name of the employee at write time.
    pub employee_name: String,
    /// Date of the shift.
    pub date: NaiveDate,
    /// Page id of the shift.
    pub shift_id: String,
    /// Rate copied from the employee at write time; `None` writes an empty cell.
    pub rate: Option<Decimal>,
}

impl PayrollDraft {
    /// Drafts the payroll row for one employee on one shift.
    pub fn for_shift(employee: &Employee, shift: &Shift) -> Self {
        Self {
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            date: shift.date,
            shift_id: shift.id.clone(),
            rate: employee.rate,
        }
    }

    /// Title of the row: the employee name followed by the date.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use shift_payroll::models::PayrollDraft;
    ///
    /// let draft = PayrollDraft {
    ///     employee_id: "e1".to_string(),
    ///     employee_name: "Ada".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
    ///     shift_id: "s1".to_string(),
    ///     rate: Some(Decimal::new(100, 0)),
    /// };
    /// assert_eq!(draft.title(), "Ada 2024-01-05");
    /// ```
    pub fn title(&self) -> String {
        format!("{} {}", self.employee_name, self.date)
    }

    /// Builds the create request for the payroll database.
    pub fn to_request(
        &self,
        payroll_database_id: &str,
        properties: &PayrollProperties,
    ) -> CreatePageRequest {
        CreatePageRequest::in_database(payroll_database_id)
            .with_property(properties.title.as_str(), title_value(&self.title()))
            .with_property(properties.employee.as_str(), relation_value([&self.employee_id]))
            .with_property(properties.date.as_str(), date_value(self.date))
            .with_property(properties.rate.as_str(), optional_number_value(self.rate))
            .with_property(properties.shift.as_str(), relation_value([&self.shift_id]))
    }
}

/// A payroll row that exists in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// Page id assigned by the store.
    pub id: String,
    /// Title written to the row.
    pub title: String,
    /// Page id of the paid employee.
    pub employee_id: String,
    /// Date of the shift.
    pub date: NaiveDate,
    /// Rate paid, if the employee had one.
    pub rate: Option<Decimal>,
    /// Page id of the shift.
    pub shift_id: String,
}

impl PayrollEntry {
    /// Combines a written draft with the id the store assigned.
    pub fn from_draft(id: impl Into<String>, draft: PayrollDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title(),
            employee_id: draft.employee_id,
            date: draft.date,
            rate: draft.rate,
            shift_id: draft.shift_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftStatus;
    use serde_json::json;

    fn draft() -> PayrollDraft {
        let employee = Employee {
            id: "e2".to_string(),
            name: "Grace".to_string(),
            rate: Some(Decimal::new(1505, 1)),
        };
        let shift = Shift {
            id: "s1".to_string(),
            status: ShiftStatus::Accepted,
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            staff: vec!["e1".to_string(), "e2".to_string()],
        };
        PayrollDraft::for_shift(&employee, &shift)
    }

    #[test]
    fn test_request_carries_every_payroll_column() {
        let request = draft().to_request("db_payroll", &PayrollProperties::default());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "parent": { "database_id": "db_payroll" },
                "properties": {
                    "Name": { "title": [{ "text": { "content": "Grace 2024-01-05" } }] },
                    "Employee": { "relation": [{ "id": "e2" }] },
                    "Date": { "date": { "start": "2024-01-05" } },
                    "Daily rate": { "number": 150.5 },
                    "Shift": { "relation": [{ "id": "s1" }] }
                }
            })
        );
    }

    #[test]
    fn test_missing_rate_writes_empty_cell() {
        let mut draft = draft();
        draft.rate = None;
        let request = draft.to_request("db_payroll", &PayrollProperties::default());
        let request = serde_json::to_value(&request).unwrap();
        assert_eq!(request["properties"]["Daily rate"], json!({ "number": null }));
        assert_eq!(
            request["properties"]["Name"],
            json!({ "title": [{ "text": { "content": "Grace 2024-01-05" } }] })
        );
    }

    #[test]
    fn test_degraded_employee_title_keeps_date() {
        let mut draft = draft();
        draft.employee_name = String::new();
        assert_eq!(draft.title(), " 2024-01-05");
    }

    #[test]
    fn test_entry_from_draft() {
        let entry = PayrollEntry::from_draft("row_1", draft());
        assert_eq!(entry.id, "row_1");
        assert_eq!(entry.title, "Grace 2024-01-05");
        assert_eq!(entry.employee_id, "e2");
        assert_eq!(entry.shift_id, "s1");
    }
}
