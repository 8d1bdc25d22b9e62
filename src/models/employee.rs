//! Employee model and the outcome of looking one up.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EmployeeProperties;
use crate::notion::Page;

/// An employee as needed for payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Page id of the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Flat amount paid per shift; `None` when the rate cell is empty.
    pub rate: Option<Decimal>,
}

impl Employee {
    /// An employee with an empty name and zero rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use shift_payroll::models::Employee;
    ///
    /// let employee = Employee::placeholder("emp_001");
    /// assert_eq!(employee.name, "");
    /// assert_eq!(employee.rate, Some(Decimal::ZERO));
    /// ```
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            rate: Some(Decimal::ZERO),
        }
    }
}

/// Result of reading an employee record.
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeLookup {
    /// Name and rate columns were both present. The rate cell may be empty.
    Found(Employee),
    /// The record did not have the expected shape; the employee is a
    /// placeholder with empty name and zero rate.
    Degraded {
        /// The substituted employee.
        employee: Employee,
        /// Which part of the record was missing.
        reason: String,
    },
}

impl EmployeeLookup {
    /// Reads name and rate from an employee page.
    ///
    /// Only an absent title segment or an absent rate property degrades the
    /// lookup. An empty rate cell keeps the name and carries no rate.
    pub fn from_page(page: &Page, properties: &EmployeeProperties) -> Self {
        let name = page.title_text(&properties.name);
        let rate = page.number_cell(&properties.rate);

        match (name, rate) {
            (Some(name), Some(rate)) => Self::Found(Employee {
                id: page.id.clone(),
                name: name.to_string(),
                rate,
            }),
            (name, rate) => {
                let mut missing = Vec::new();
                if name.is_none() {
                    missing.push(format!("{} title", properties.name));
                }
                if rate.is_none() {
                    missing.push(format!("{} number", properties.rate));
                }
                Self::Degraded {
                    employee: Employee::placeholder(page.id.clone()),
                    reason: format!("missing {}", missing.join(" and ")),
                }
            }
        }
    }

    /// Returns true when defaults were substituted.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Returns the employee, substituted or not.
    pub fn employee(&self) -> &Employee {
        match self {
            Self::Found(employee) | Self::Degraded { employee, .. } => employee,
        }
    }

    /// Consumes the lookup and returns the employee.
    pub fn into_employee(self) -> Employee {
        match self {
            Self::Found(employee) | Self::Degraded { employee, .. } => employee,
        }
    }
}
