use crate::components::{
    cards::StatCard,
    layout::{ErrorMessage, LoadingSpinner},
};
use crate::pages::dashboard::{
    components::LiveClock,
    view_model::{stat_cards, DashboardViewModel},
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = DashboardViewModel::new();

    view! {
        <div class="space-y-6">
            <h1 class="text-hierarchy-1">"DASHBOARD"</h1>
            <LiveClock time_zone=vm.time_zone/>
            {move || match vm.stats.get() {
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(Err(_)) => view! { <ErrorMessage message="FAILED TO LOAD DASHBOARD DATA"/> }.into_view(),
                Some(Ok(stats)) => view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                        {stat_cards(&stats)
                            .into_iter()
                            .map(|(label, value, tone)| view! {
                                <StatCard label=label value=value.to_string() tone=tone/>
                            })
                            .collect_view()}
                    </div>
                    <p class="status-success">"[ STATUS: OPERATIONAL ]"</p>
                }
                .into_view(),
            }}
        </div>
    }
}
