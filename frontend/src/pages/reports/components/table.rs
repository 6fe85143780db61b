use crate::api::AttendanceRecord;
use crate::components::{
    cards::{StatCard, StatTone},
    layout::InfoMessage,
};
use crate::pages::attendance::utils::status_text_class;
use crate::pages::reports::utils::ReportStats;
use leptos::*;

#[component]
pub fn ReportResults(records: Vec<AttendanceRecord>) -> impl IntoView {
    let stats = ReportStats::from_records(&records);
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <StatCard label="TOTAL RECORDS" value=stats.total.to_string()/>
            <StatCard label="PRESENT" value=stats.present.to_string() tone=StatTone::Positive/>
            <StatCard label="ABSENT" value=stats.absent.to_string() tone=StatTone::Negative/>
        </div>
        {if records.is_empty() {
            view! { <InfoMessage message="NO RECORDS MATCH THE SELECTED FILTERS"/> }.into_view()
        } else {
            view! {
                <div class="overflow-x-auto border border-border">
                    <table class="w-full text-left">
                        <thead>
                            <tr class="border-b border-border">
                                <th class="px-4 py-2">"DATE"</th>
                                <th class="px-4 py-2">"EMPLOYEE ID"</th>
                                <th class="px-4 py-2">"EMPLOYEE NAME"</th>
                                <th class="px-4 py-2">"STATUS"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {records
                                .into_iter()
                                .map(|record| view! {
                                    <tr class="border-b border-border">
                                        <td class="px-4 py-2">{record.date.to_string()}</td>
                                        <td class="px-4 py-2">{record.employee_id}</td>
                                        <td class="px-4 py-2">{record.employee_name}</td>
                                        <td class="px-4 py-2">
                                            <span class=status_text_class(Some(record.status))>
                                                {record.status.as_str()}
                                            </span>
                                        </td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            }
            .into_view()
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::AttendanceStatus;
    use crate::test_support::helpers::{day, employee, record};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn results_show_stats_and_rows() {
        let html = render_to_string(|| {
            let asha = employee("e1", "EMP-001", "Asha Rao");
            let records = vec![
                record(1, &asha, day(2024, 1, 15), AttendanceStatus::Present),
                record(2, &asha, day(2024, 1, 16), AttendanceStatus::Absent),
            ];
            view! { <ReportResults records=records/> }
        });
        assert!(html.contains("TOTAL RECORDS"));
        assert!(html.contains("2024-01-16"));
        assert!(html.contains("Asha Rao"));
        assert!(html.contains("text-systemRed"));
    }

    #[test]
    fn empty_results_say_so() {
        let html = render_to_string(|| view! { <ReportResults records=Vec::new()/> });
        assert!(html.contains("[ NO RECORDS MATCH THE SELECTED FILTERS ]"));
    }
}
