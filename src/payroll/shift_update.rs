//! Closing out a shift once its payroll is written.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::SyncResult;
use crate::notion::{UpdatePageRequest, WorkspaceApi, status_value, title_value};

use super::JobContext;

/// Sets the shift's status to handled and its title to the bare date.
pub async fn mark_shift_handled<A: WorkspaceApi>(
    api: &A,
    ctx: &JobContext,
    shift_id: &str,
    date: NaiveDate,
) -> SyncResult<()> {
    let columns = &ctx.schema.shift;
    let request = UpdatePageRequest::default()
        .with_property(
            columns.status.as_str(),
            status_value(&ctx.schema.statuses.handled),
        )
        .with_property(columns.title.as_str(), title_value(&date.to_string()));

    api.update_page(shift_id, &request).await?;
    debug!(shift_id = %shift_id, "Updated shift data");
    Ok(())
}
