//! Fetching the shifts that are ready for payroll.

use tracing::debug;

use crate::error::SyncResult;
use crate::models::Shift;
use crate::notion::{Paginator, QueryFilter, WorkspaceApi};

use super::JobContext;

/// The filter selecting shifts whose status is the accepted option.
pub fn accepted_shifts_filter(ctx: &JobContext) -> QueryFilter {
    QueryFilter::status_equals(
        ctx.schema.shift.status.as_str(),
        ctx.schema.statuses.accepted.as_str(),
    )
}

/// Returns every accepted shift, following pagination to the last page.
///
/// Fails if any returned row cannot be read as a shift.
pub async fn fetch_accepted_shifts<A: WorkspaceApi>(
    api: &A,
    ctx: &JobContext,
) -> SyncResult<Vec<Shift>> {
    let pages = Paginator::new(api, &ctx.shifts_database_id, Some(accepted_shifts_filter(ctx)))
        .collect_all()
        .await?;

    let shifts = pages
        .iter()
        .map(|page| Shift::from_page(page, &ctx.schema.shift, &ctx.schema.statuses))
        .collect::<SyncResult<Vec<_>>>()?;

    debug!(
        database_id = %ctx.shifts_database_id,
        count = shifts.len(),
        "Got shifts from database"
    );
    Ok(shifts)
}
