use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
use crate::components::layout::InfoMessage;
use crate::config::AppTimeZone;
use crate::utils::time::format_timestamp;
use leptos::*;

pub fn status_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "text-systemGreen",
        AttendanceStatus::Absent => "text-systemRed",
    }
}

#[component]
fn Field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <p class="text-hierarchy-5 mb-1">{label}</p>
            <p class="text-hierarchy-3">{value}</p>
        </div>
    }
}

#[component]
pub fn EmployeeInfo(employee: Employee, time_zone: AppTimeZone) -> impl IntoView {
    view! {
        <div class="container-unibody border border-border p-4 mb-8">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <Field label="EMPLOYEE ID" value=employee.employee_id.clone()/>
                <Field label="FULL NAME" value=employee.full_name.clone()/>
                <Field label="EMAIL" value=employee.email.clone()/>
                <Field label="DEPARTMENT" value=employee.department.clone()/>
                <Field label="CREATED AT" value=format_timestamp(time_zone, &employee.created_at)/>
                <Field label="UPDATED AT" value=format_timestamp(time_zone, &employee.updated_at)/>
            </div>
        </div>
    }
}

#[component]
pub fn AttendanceHistory(records: Vec<AttendanceRecord>, time_zone: AppTimeZone) -> impl IntoView {
    if records.is_empty() {
        return view! { <InfoMessage message="NO ATTENDANCE RECORDS FOUND"/> }.into_view();
    }
    view! {
        <div class="overflow-x-auto border border-border">
            <table class="w-full text-left">
                <thead>
                    <tr class="border-b border-border">
                        <th class="px-4 py-2">"DATE"</th>
                        <th class="px-4 py-2">"STATUS"</th>
                        <th class="px-4 py-2">"MARKED AT"</th>
                    </tr>
                </thead>
                <tbody>
                    {records
                        .into_iter()
                        .map(|record| view! {
                            <tr class="border-b border-border">
                                <td class="px-4 py-2">{record.date.to_string()}</td>
                                <td class="px-4 py-2">
                                    <span class=status_class(record.status)>{record.status.as_str()}</span>
                                </td>
                                <td class="px-4 py-2">{format_timestamp(time_zone, &record.created_at)}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{day, employee, record};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn info_formats_timestamps_in_the_configured_zone() {
        let html = render_to_string(|| {
            let emp = employee("e1", "EMP-001", "Asha Rao");
            view! { <EmployeeInfo employee=emp time_zone=AppTimeZone::default()/> }
        });
        assert!(html.contains("EMP-001"));
        // 2024-01-01T00:00:00Z in IST; SSR escapes the slashes.
        assert!(html.contains("01&#x2F;01&#x2F;2024, 05:30:00"));
    }

    #[test]
    fn history_lists_records_or_empty_notice() {
        let html = render_to_string(|| {
            let emp = employee("e1", "EMP-001", "Asha Rao");
            let records = vec![record(1, &emp, day(2024, 1, 15), AttendanceStatus::Absent)];
            view! { <AttendanceHistory records=records time_zone=AppTimeZone::default()/> }
        });
        assert!(html.contains("2024-01-15"));
        assert!(html.contains("text-systemRed"));

        let empty = render_to_string(|| {
            view! { <AttendanceHistory records=Vec::new() time_zone=AppTimeZone::default()/> }
        });
        assert!(empty.contains("[ NO ATTENDANCE RECORDS FOUND ]"));
    }
}
