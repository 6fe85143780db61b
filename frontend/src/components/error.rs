use crate::api::{ApiError, ErrorBody, CODE_UNKNOWN};
use crate::components::common::{Button, ButtonVariant};
use crate::utils::browser;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="status-error border border-status-error-border px-4 py-3 space-y-1 my-2">
                <div class="font-bold">
                    {move || error.get().map(|e| format!("[ ERROR: {} ]", e.error.to_uppercase())).unwrap_or_default()}
                </div>
                {move || error.get().map(|e| {
                    if let Some(ErrorBody::Fields(fields)) = e.body() {
                        if fields.len() > 1 {
                            return view! {
                                <ul class="list-disc list-inside text-sm">
                                    {fields.into_iter().map(|(field, message)| {
                                        view! { <li>{format!("{}: {}", field, message)}</li> }
                                    }).collect_view()}
                                </ul>
                            }.into_view();
                        }
                    }
                    if e.code != CODE_UNKNOWN && !e.code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"CODE: "}{e.code.clone()}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

/// Fallback for the route tree's error boundary.
#[component]
pub fn CrashScreen(errors: RwSignal<Errors>) -> impl IntoView {
    let reload = |_: ev::MouseEvent| {
        if let Some(window) = browser::window() {
            if let Err(err) = window.location().reload() {
                log::error!("Reload failed: {:?}", err);
            }
        }
    };

    view! {
        <div class="container-unibody border border-status-error-border p-6 space-y-4 font-mono">
            <h1 class="text-hierarchy-1 status-error">"[ ERROR: APPLICATION CRASHED ]"</h1>
            <p class="text-hierarchy-4">"MESSAGE:"</p>
            <ul class="text-hierarchy-3 space-y-1">
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, error)| view! { <li>{error.to_string()}</li> })
                        .collect_view()
                }}
            </ul>
            <Button variant=ButtonVariant::Primary on:click=reload>"[ RELOAD APPLICATION ]"</Button>
        </div>
    }
}
