use crate::api::{ApiClient, AttendanceStatus, Employee, QueryClient};
use crate::pages::attendance::repository::invalidated_by_marking;
use crate::pages::bulk_attendance::reconcile::{run_bulk_mark, BulkMarkReport, BulkProgress};
use chrono::NaiveDate;

pub use crate::pages::attendance::repository::fetch_attendance_for_date;
pub use crate::pages::employees::repository::fetch_employees;

/// Creates one record per unmarked employee, then invalidates once for the
/// whole batch.
pub async fn mark_unmarked(
    api: &ApiClient,
    query: &QueryClient,
    unmarked: &[Employee],
    date: NaiveDate,
    status: AttendanceStatus,
    on_progress: impl FnMut(BulkProgress),
) -> BulkMarkReport {
    let report = run_bulk_mark(
        unmarked,
        date,
        status,
        |payload| {
            let api = api.clone();
            async move { api.create_attendance(&payload).await }
        },
        on_progress,
    )
    .await;
    if !report.is_noop() {
        query.invalidate_many(&invalidated_by_marking());
    }
    report
}
