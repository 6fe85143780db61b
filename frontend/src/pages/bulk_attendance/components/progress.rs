use crate::pages::bulk_attendance::reconcile::{BulkMarkReport, BulkProgress};
use leptos::*;

pub fn progress_label(progress: &BulkProgress) -> String {
    format!("MARKING: {}/{} EMPLOYEES", progress.completed, progress.total)
}

pub fn report_headline(report: &BulkMarkReport) -> String {
    format!("[ BULK MARKING COMPLETE: {}/{} ]", report.succeeded, report.total)
}

#[component]
pub fn BulkProgressBar(progress: BulkProgress) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <p class="status-loading">
                {progress_label(&progress)}
            </p>
            <div class="w-full h-3 border border-border">
                <div
                    class="h-full bg-systemBlue"
                    style=format!("width: {}%", progress.percent())
                ></div>
            </div>
        </div>
    }
}

#[component]
pub fn BulkReportSummary(report: BulkMarkReport) -> impl IntoView {
    let class = if report.failures.is_empty() {
        "status-success"
    } else {
        "status-error"
    };
    view! {
        <div class="space-y-2 my-4">
            <p class=class>
                {report_headline(&report)}
            </p>
            <ul class="list-disc list-inside text-sm status-error">
                {report
                    .failures
                    .into_iter()
                    .map(|failure| view! { <li>{format!("{}: {}", failure.employee_id, failure.message)}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
