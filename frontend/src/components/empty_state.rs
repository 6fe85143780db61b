use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] action: Option<View>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 border border-dashed border-border">
            <p class="text-fg">{format!("[ {} ]", title)}</p>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-fg-muted">{desc}</p>
            })}
            {action.map(|action| view! { <div class="mt-4">{action}</div> })}
        </div>
    }
}
