//! Looking up an employee's name and rate.

use tracing::{debug, warn};

use crate::error::SyncResult;
use crate::models::EmployeeLookup;
use crate::notion::WorkspaceApi;

use super::JobContext;

/// Retrieves an employee page and reads its name and rate.
///
/// A page without the expected name or rate yields
/// [`EmployeeLookup::Degraded`] and a warning; request failures are
/// returned as errors.
pub async fn lookup_employee<A: WorkspaceApi>(
    api: &A,
    ctx: &JobContext,
    employee_id: &str,
) -> SyncResult<EmployeeLookup> {
    let page = api.retrieve_page(employee_id).await?;
    let lookup = EmployeeLookup::from_page(&page, &ctx.schema.employee);

    match &lookup {
        EmployeeLookup::Found(_) => debug!(employee_id = %employee_id, "Got employee data"),
        EmployeeLookup::Degraded { reason, .. } => warn!(
            employee_id = %employee_id,
            reason = %reason,
            "Employee record incomplete, using empty name and zero rate"
        ),
    }
    Ok(lookup)
}
