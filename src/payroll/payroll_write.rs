//! Writing payroll rows.

use tracing::debug;

use crate::error::SyncResult;
use crate::models::{PayrollDraft, PayrollEntry};
use crate::notion::WorkspaceApi;

use super::JobContext;

/// Creates one payroll row.
///
/// There is no idempotency key: calling this twice writes two rows.
pub async fn create_payroll_entry<A: WorkspaceApi>(
    api: &A,
    ctx: &JobContext,
    draft: PayrollDraft,
) -> SyncResult<PayrollEntry> {
    let request = draft.to_request(&ctx.payroll_database_id, &ctx.schema.payroll);
    let page = api.create_page(&request).await?;
    debug!(
        database_id = %ctx.payroll_database_id,
        entry_id = %page.id,
        "Created payroll entry"
    );
    Ok(PayrollEntry::from_draft(page.id, draft))
}
