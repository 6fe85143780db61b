use crate::components::common::{Button, ButtonVariant};
use leptos::ev::KeyboardEvent;
use leptos::*;

/// Modal confirmation for irreversible actions. Escape, the backdrop and
/// CANCEL all call `on_cancel`; CONFIRM is locked while `pending` holds.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let variant = if destructive {
        ButtonVariant::Destructive
    } else {
        ButtonVariant::Primary
    };
    let confirm_label = store_value(confirm_label.unwrap_or_else(|| "[ CONFIRM ]".to_string()));
    let confirm_text = move || {
        if pending.get() {
            "[ WORKING ]".to_string()
        } else {
            confirm_label.get_value()
        }
    };
    let title = store_value(title);
    let message = store_value(message);

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md bg-surface border border-border p-6 space-y-4 font-mono"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-hierarchy-3">{title.get_value()}</h2>
                    <p class="text-sm text-fg-muted">{message.get_value()}</p>
                    <div class="flex justify-end gap-2">
                        <Button on:click=move |_| on_cancel.call(())>"[ CANCEL ]"</Button>
                        <Button
                            variant=variant
                            disabled=pending
                            on:click=move |_| on_confirm.call(())
                        >
                            {confirm_text}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
