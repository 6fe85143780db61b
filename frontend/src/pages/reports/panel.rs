use crate::components::{error::InlineErrorMessage, layout::{InfoMessage, LoadingSpinner}};
use crate::pages::reports::{
    components::{ReportFilters, ReportResults},
    view_model::ReportsViewModel,
};
use leptos::*;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let vm = ReportsViewModel::new();

    view! {
        <div class="space-y-6">
            <h1 class="text-hierarchy-1">"ATTENDANCE REPORTS"</h1>
            <ReportFilters vm=vm/>
            {move || match vm.report.get() {
                Some(None) => view! {
                    <InfoMessage message="SELECT FILTERS AND PRESS SEARCH"/>
                }
                .into_view(),
                None if vm.searched.get().is_none() => view! {
                    <InfoMessage message="SELECT FILTERS AND PRESS SEARCH"/>
                }
                .into_view(),
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(Some(Err(err))) => {
                    let error = Signal::derive(move || Some(err.clone()));
                    view! { <InlineErrorMessage error=error/> }.into_view()
                }
                Some(Some(Ok(records))) => view! { <ReportResults records=records/> }.into_view(),
            }}
        </div>
    }
}
