use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="space-y-4 py-12 text-center">
            <h1 class="text-hierarchy-1 status-error">"[ 404: NOT FOUND ]"</h1>
            <p>"THE REQUESTED RESOURCE DOES NOT EXIST"</p>
            <a href="/" class="text-systemBlue hover:underline">"[ RETURN TO DASHBOARD ]"</a>
        </div>
    }
}
