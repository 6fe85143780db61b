use leptos::*;

/// Labelled text input. The error line renders as `[ ERROR: ... ]`.
#[component]
pub fn TextInput(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let input_id = id.clone();
    view! {
        <div class="w-full">
            <label for=id class="block mb-2 text-hierarchy-4 uppercase">{label}</label>
            <input
                id=input_id.clone()
                name=input_id
                type=input_type.unwrap_or("text")
                class="input-terminal w-full"
                placeholder=placeholder.unwrap_or_default()
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    value.set(raw.clone());
                    if let Some(cb) = on_input {
                        cb.call(raw);
                    }
                }
            />
            {move || error.get().map(|msg| view! {
                <p class="mt-1 text-hierarchy-5 status-error">{format!("[ ERROR: {} ]", msg)}</p>
            })}
        </div>
    }
}

/// Native `YYYY-MM-DD` date input bound to a string signal.
#[component]
pub fn DateInput(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] max: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let input_id = id.clone();
    view! {
        <div class="w-full">
            <label for=id class="block mb-2 text-hierarchy-4 uppercase">{label}</label>
            <input
                id=input_id.clone()
                name=input_id
                type="date"
                class="input-terminal w-full"
                max=move || max.get()
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
