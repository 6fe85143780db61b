use crate::components::{
    empty_state::EmptyState,
    forms::DateInput,
    layout::{ErrorMessage, LoadingSpinner},
};
use crate::pages::attendance::{
    components::MarkingTable, utils::FUTURE_DATE_MESSAGE, view_model::AttendanceViewModel,
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = AttendanceViewModel::new();
    let selection = vm.picker.selection;
    let pending = vm.mark_action.pending();
    let error = vm.error();
    let day_records = vm.day_records();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-hierarchy-1">"MARK ATTENDANCE"</h1>
                <Show when=move || pending.get()>
                    <span class="status-loading cursor-blink">"SAVING"</span>
                </Show>
            </div>
            <div class="container-unibody border border-border p-4 max-w-sm">
                <DateInput
                    id="attendance_date"
                    label="SELECT DATE"
                    value=vm.picker.input
                    max=vm.picker.max()
                />
                <Show when=move || selection.get().is_future()>
                    <ErrorMessage message=FUTURE_DATE_MESSAGE/>
                </Show>
            </div>
            {move || error.get().map(|msg| view! { <ErrorMessage message=msg.to_uppercase()/> })}
            {move || match (vm.employees.get(), day_records.get()) {
                (Some(Err(_)), _) => {
                    view! { <ErrorMessage message="FAILED TO LOAD EMPLOYEES"/> }.into_view()
                }
                (_, Some(Err(_))) => {
                    view! { <ErrorMessage message="FAILED TO LOAD ATTENDANCE"/> }.into_view()
                }
                (Some(Ok(employees)), _) if employees.is_empty() => view! {
                    <EmptyState
                        title="NO EMPLOYEES FOUND"
                        description="Add employees before marking attendance."
                    />
                }
                .into_view(),
                (Some(Ok(employees)), Some(Ok(records))) => view! {
                    <MarkingTable employees=employees records=records vm=vm/>
                }
                .into_view(),
                _ => view! { <LoadingSpinner/> }.into_view(),
            }}
        </div>
    }
}
