//! The payroll run: every accepted shift, in order.

use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::error::SyncResult;
use crate::models::{PayrollDraft, RunSummary};
use crate::notion::WorkspaceApi;

use super::{
    JobContext, create_payroll_entry, fetch_accepted_shifts, filter_handled_employees,
    lookup_employee, mark_shift_handled,
};

/// Writes payroll rows for every accepted shift and marks each shift handled.
///
/// For each shift, employees already paid for the shift's date are skipped,
/// a row is written for each remaining employee, and the shift is then
/// marked handled even if no rows were written.
///
/// A shift without staff ends the whole run: the shifts after it are left
/// untouched and the summary records where processing stopped.
///
/// Any error other than an incomplete employee record aborts the run;
/// rows and status changes already written stay in place.
pub async fn run<A: WorkspaceApi>(api: &A, ctx: &JobContext) -> SyncResult<RunSummary> {
    let run_id = Uuid::new_v4();
    process_shifts(api, ctx)
        .instrument(info_span!("payroll_run", run_id = %run_id))
        .await
}

async fn process_shifts<A: WorkspaceApi>(api: &A, ctx: &JobContext) -> SyncResult<RunSummary> {
    info!("Started calculation");
    let shifts = fetch_accepted_shifts(api, ctx).await?;
    let mut summary = RunSummary {
        shifts_fetched: shifts.len(),
        ..RunSummary::default()
    };

    for shift in &shifts {
        if !shift.has_staff() {
            warn!(
                shift_id = %shift.id,
                "No employees set for shift. Can't calculate payroll"
            );
            summary.stopped_at_shift = Some(shift.id.clone());
            log_summary(&summary);
            return Ok(summary);
        }

        let pending = filter_handled_employees(api, ctx, shift.date, &shift.staff).await?;
        summary.employees_skipped += shift.staff.len().saturating_sub(pending.len());

        for employee_id in &pending {
            let lookup = lookup_employee(api, ctx, employee_id).await?;
            if lookup.is_degraded() {
                summary.degraded_lookups += 1;
            }
            let employee = lookup.into_employee();

            create_payroll_entry(api, ctx, PayrollDraft::for_shift(&employee, shift)).await?;
            summary.entries_created += 1;
            info!(employee = %employee.name, shift_id = %shift.id, "Handled employee");
        }

        mark_shift_handled(api, ctx, &shift.id, shift.date).await?;
        summary.shifts_handled += 1;
    }

    log_summary(&summary);
    Ok(summary)
}

fn log_summary(summary: &RunSummary) {
    info!(
        shifts_fetched = summary.shifts_fetched,
        shifts_handled = summary.shifts_handled,
        entries_created = summary.entries_created,
        employees_skipped = summary.employees_skipped,
        degraded_lookups = summary.degraded_lookups,
        stopped_at_shift = summary.stopped_at_shift.as_deref().unwrap_or_default(),
        "Finished calculation"
    );
}
