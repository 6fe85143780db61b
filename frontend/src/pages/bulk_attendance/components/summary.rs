use crate::components::cards::{StatCard, StatTone};
use crate::pages::bulk_attendance::view_model::DaySummary;
use leptos::*;

#[component]
pub fn DaySummaryCards(summary: DaySummary) -> impl IntoView {
    let unmarked_tone = if summary.unmarked.is_empty() {
        StatTone::Neutral
    } else {
        StatTone::Pending
    };
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <StatCard label="TOTAL EMPLOYEES" value=summary.total.to_string()/>
            <StatCard label="MARKED" value=summary.marked().to_string() tone=StatTone::Positive/>
            <StatCard label="UNMARKED" value=summary.unmarked.len().to_string() tone=unmarked_tone/>
        </div>
    }
}
