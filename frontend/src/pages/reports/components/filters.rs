use crate::components::{
    common::{Button, ButtonVariant},
    forms::DateInput,
    layout::ErrorMessage,
};
use crate::pages::reports::{utils::StatusFilter, view_model::ReportsViewModel};
use leptos::*;

#[component]
pub fn ReportFilters(vm: ReportsViewModel) -> impl IntoView {
    let max = vm.max_date.get_value();
    view! {
        <div class="container-unibody border border-border p-4 space-y-4">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <DateInput id="report_from" label="FROM" value=vm.from max=max.clone()/>
                <DateInput id="report_to" label="TO" value=vm.to max=max/>
                <div class="w-full">
                    <label for="report_status" class="block mb-2 text-hierarchy-4 uppercase">"STATUS"</label>
                    <select
                        id="report_status"
                        class="input-terminal w-full"
                        on:change=move |ev| vm.set_status(&event_target_value(&ev))
                    >
                        {StatusFilter::ALL
                            .into_iter()
                            .map(|filter| view! {
                                <option
                                    value=filter.value()
                                    selected=move || vm.status.get() == filter
                                >
                                    {filter.value()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
            {move || vm.range_error.get().map(|msg| view! { <ErrorMessage message=msg/> })}
            <Button variant=ButtonVariant::Primary on:click=move |_| vm.search()>
                "[ SEARCH ]"
            </Button>
        </div>
    }
}
