use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Destructive,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-bracket border border-border text-fg hover:bg-fg hover:text-surface",
            ButtonVariant::Primary => "btn-primary border border-action-primary-bg text-action-primary-bg hover:bg-action-primary-bg hover:text-surface",
            ButtonVariant::Destructive => "btn-destructive border border-action-danger-bg text-action-danger-bg hover:bg-action-danger-bg hover:text-surface",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center px-4 py-2 text-sm font-mono uppercase transition-colors duration-150 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class.get()
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 cursor-blink">"_"</span>
            </Show>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_have_distinct_classes() {
        assert!(ButtonVariant::Primary.classes().contains("btn-primary"));
        assert!(ButtonVariant::Destructive.classes().contains("btn-destructive"));
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn disabled_button_renders_disabled_attribute() {
        let html = render_to_string(|| {
            view! { <Button variant=ButtonVariant::Primary disabled=true>"[ SAVE ]"</Button> }
        });
        assert!(html.contains("disabled"));
        assert!(html.contains("[ SAVE ]"));
    }
}
