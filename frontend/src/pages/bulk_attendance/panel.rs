use crate::api::AttendanceStatus;
use crate::components::{
    common::{Button, ButtonVariant},
    forms::DateInput,
    layout::{ErrorMessage, LoadingSpinner, SuccessMessage},
};
use crate::pages::attendance::utils::FUTURE_DATE_MESSAGE;
use crate::pages::bulk_attendance::{
    components::{BulkProgressBar, BulkReportSummary, DaySummaryCards},
    view_model::BulkAttendanceViewModel,
};
use leptos::*;

#[component]
pub fn BulkAttendancePage() -> impl IntoView {
    let vm = BulkAttendanceViewModel::new();
    let selection = vm.picker.selection;
    let running = vm.running();
    let can_run = vm.can_run();
    let summary = vm.summary();

    view! {
        <div class="space-y-6">
            <h1 class="text-hierarchy-1">"BULK ATTENDANCE MARKING"</h1>
            <div class="container-unibody border border-border p-4 max-w-sm">
                <DateInput
                    id="bulk_date"
                    label="SELECT DATE"
                    value=vm.picker.input
                    max=vm.picker.max()
                    disabled=running
                />
                <Show when=move || selection.get().is_future()>
                    <ErrorMessage message=FUTURE_DATE_MESSAGE/>
                </Show>
            </div>
            {move || match summary.get() {
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(Err(_)) => view! { <ErrorMessage message="FAILED TO LOAD ATTENDANCE DATA"/> }.into_view(),
                Some(Ok(day)) => {
                    let remaining = day.unmarked.len();
                    let date_label = vm.picker.input.get();
                    view! {
                        <DaySummaryCards summary=day/>
                        {if remaining == 0 {
                            view! {
                                <SuccessMessage message=format!("ALL EMPLOYEES MARKED FOR {}", date_label)/>
                            }
                            .into_view()
                        } else {
                            view! {
                                <div class="container-unibody border border-border p-4 space-y-4">
                                    <h2 class="text-hierarchy-2">"BULK ACTIONS"</h2>
                                    <p>{format!("MARK ALL {} UNMARKED EMPLOYEES AS:", remaining)}</p>
                                    <div class="flex gap-2">
                                        <Button
                                            variant=ButtonVariant::Primary
                                            disabled=Signal::derive(move || !can_run.get())
                                            on:click=move |_| vm.mark_all(AttendanceStatus::Present)
                                        >
                                            "[ MARK ALL PRESENT ]"
                                        </Button>
                                        <Button
                                            variant=ButtonVariant::Destructive
                                            disabled=Signal::derive(move || !can_run.get())
                                            on:click=move |_| vm.mark_all(AttendanceStatus::Absent)
                                        >
                                            "[ MARK ALL ABSENT ]"
                                        </Button>
                                    </div>
                                </div>
                            }
                            .into_view()
                        }}
                    }
                    .into_view()
                }
            }}
            {move || {
                if running.get() {
                    vm.progress
                        .get()
                        .map(|progress| view! { <BulkProgressBar progress=progress/> }.into_view())
                } else {
                    vm.run_action
                        .value()
                        .get()
                        .map(|report| view! { <BulkReportSummary report=report/> }.into_view())
                }
            }}
        </div>
    }
}
