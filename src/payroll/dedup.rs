//! Skipping employees who already have a payroll row for a date.
//!
//! The check is a read before the write, not a constraint in the store, so
//! two runs racing over the same shift can still both write a row.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{SyncError, SyncResult};
use crate::notion::{Paginator, QueryFilter, WorkspaceApi};

use super::JobContext;

/// Payroll rows on `date` that reference any of `employee_ids`.
pub fn handled_employees_filter(
    ctx: &JobContext,
    date: NaiveDate,
    employee_ids: &[String],
) -> QueryFilter {
    let columns = &ctx.schema.payroll;
    QueryFilter::And {
        and: vec![
            QueryFilter::date_equals(columns.date.as_str(), date.to_string()),
            QueryFilter::Or {
                or: employee_ids
                    .iter()
                    .map(|id| QueryFilter::relation_contains(columns.employee.as_str(), id.as_str()))
                    .collect(),
            },
        ],
    }
}

/// Keeps the employees not in `handled`, in their original order.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use shift_payroll::payroll::exclude_handled;
///
/// let staff = vec!["e1".to_string(), "e2".to_string(), "e3".to_string()];
/// let handled = HashSet::from(["e2".to_string()]);
/// assert_eq!(exclude_handled(&staff, &handled), vec!["e1", "e3"]);
/// ```
pub fn exclude_handled(employee_ids: &[String], handled: &HashSet<String>) -> Vec<String> {
    employee_ids
        .iter()
        .filter(|id| !handled.contains(*id))
        .cloned()
        .collect()
}

/// Returns the employees of a shift that have no payroll row for `date` yet.
///
/// The employee of an existing row is its first related page. A matching row
/// with no related employee fails with `InvalidRecord`.
pub async fn filter_handled_employees<A: WorkspaceApi>(
    api: &A,
    ctx: &JobContext,
    date: NaiveDate,
    employee_ids: &[String],
) -> SyncResult<Vec<String>> {
    if employee_ids.is_empty() {
        return Ok(Vec::new());
    }

    let filter = handled_employees_filter(ctx, date, employee_ids);
    let rows = Paginator::new(api, &ctx.payroll_database_id, Some(filter))
        .collect_all()
        .await?;

    let employee_column = &ctx.schema.payroll.employee;
    let handled = rows
        .iter()
        .map(|row| {
            row.relation_ids(employee_column)
                .and_then(|ids| ids.into_iter().next())
                .ok_or_else(|| SyncError::InvalidRecord {
                    record_id: row.id.clone(),
                    message: format!("{} relation is empty", employee_column),
                })
        })
        .collect::<SyncResult<HashSet<String>>>()?;

    debug!(
        database_id = %ctx.payroll_database_id,
        date = %date,
        already_paid = handled.len(),
        "Got filtered employees from database"
    );
    Ok(exclude_handled(employee_ids, &handled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notion::canned::CannedQueries;
    use crate::notion::{MemoryWorkspace, Page, QueryResponse, date_value, relation_value};
    use crate::payroll::fixtures::*;
    use proptest::prelude::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_paid_employee_is_excluded_for_that_date_only() {
        let workspace = MemoryWorkspace::new();
        add_payroll_row(&workspace, "e1", date(2024, 1, 5));
        add_payroll_row(&workspace, "e2", date(2024, 1, 4));
        let ctx = JobContext::new(SHIFTS, PAYROLL);

        let remaining =
            filter_handled_employees(&workspace, &ctx, date(2024, 1, 5), &ids(&["e1", "e2", "e3"]))
                .await
                .unwrap();

        assert_eq!(remaining, vec!["e2", "e3"]);
    }

    #[tokio::test]
    async fn test_rows_of_other_employees_do_not_count() {
        let workspace = MemoryWorkspace::new();
        add_payroll_row(&workspace, "e9", date(2024, 1, 5));
        let ctx = JobContext::new(SHIFTS, PAYROLL);

        let remaining =
            filter_handled_employees(&workspace, &ctx, date(2024, 1, 5), &ids(&["e1"]))
                .await
                .unwrap();

        assert_eq!(remaining, vec!["e1"]);
    }

    #[tokio::test]
    async fn test_empty_staff_issues_no_query() {
        let workspace = MemoryWorkspace::new();
        let ctx = JobContext::new(SHIFTS, PAYROLL);

        let remaining = filter_handled_employees(&workspace, &ctx, date(2024, 1, 5), &[])
            .await
            .unwrap();

        assert!(remaining.is_empty());
        assert_eq!(workspace.request_counts().queries, 0);
    }

    #[tokio::test]
    async fn test_row_matching_through_second_relation_uses_first_employee() {
        let workspace = MemoryWorkspace::new();
        workspace.insert_page(
            Some(PAYROLL),
            Page::new("shared")
                .with_property("Employee", relation_value(["e7", "e1"]))
                .with_property("Date", date_value(date(2024, 1, 5))),
        );
        let ctx = JobContext::new(SHIFTS, PAYROLL);

        let remaining =
            filter_handled_employees(&workspace, &ctx, date(2024, 1, 5), &ids(&["e1", "e7"]))
                .await
                .unwrap();

        assert_eq!(remaining, vec!["e1"]);
    }

    #[tokio::test]
    async fn test_row_without_employee_is_invalid() {
        let api = CannedQueries::new([QueryResponse {
            results: vec![
                Page::new("bad")
                    .with_property("Employee", relation_value(Vec::<&str>::new()))
                    .with_property("Date", date_value(date(2024, 1, 5))),
            ],
            has_more: false,
            next_cursor: None,
        }]);
        let ctx = JobContext::new(SHIFTS, PAYROLL);

        let result = filter_handled_employees(&api, &ctx, date(2024, 1, 5), &ids(&["e1"])).await;

        match result {
            Err(SyncError::InvalidRecord { record_id, message }) => {
                assert_eq!(record_id, "bad");
                assert_eq!(message, "Employee relation is empty");
            }
            other => panic!("expected invalid record, got {other:?}"),
        }
    }

    #[test]
    fn test_filter_shape() {
        let ctx = JobContext::new(SHIFTS, PAYROLL);
        let filter = handled_employees_filter(&ctx, date(2024, 1, 5), &ids(&["e1", "e2"]));
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            serde_json::json!({ "and": [
                { "property": "Date", "date": { "equals": "2024-01-05" } },
                { "or": [
                    { "property": "Employee", "relation": { "contains": "e1" } },
                    { "property": "Employee", "relation": { "contains": "e2" } }
                ]}
            ]})
        );
    }

    proptest! {
        #[test]
        fn prop_exclude_handled_never_returns_handled(
            staff in proptest::collection::vec("e[0-9]{1,2}", 0..20),
            handled in proptest::collection::hash_set("e[0-9]{1,2}", 0..20),
        ) {
            let remaining = exclude_handled(&staff, &handled);
            prop_assert!(remaining.iter().all(|id| !handled.contains(id)));
            let expected: Vec<String> =
                staff.iter().filter(|id| !handled.contains(*id)).cloned().collect();
            prop_assert_eq!(remaining, expected);
        }
    }
}
