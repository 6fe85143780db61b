use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Positive,
    Negative,
    Pending,
}

impl StatTone {
    pub fn value_class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "text-fg",
            StatTone::Positive => "text-systemGreen",
            StatTone::Negative => "text-systemRed",
            StatTone::Pending => "text-systemYellow",
        }
    }
}

/// Labelled figure used by the dashboard, bulk marking and report summaries.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional)] tone: StatTone,
) -> impl IntoView {
    view! {
        <div class="container-unibody border border-border p-4">
            <p class="text-hierarchy-5 mb-2">{label}</p>
            <p class=format!("text-hierarchy-1 {}", tone.value_class())>{move || value.get()}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_card_renders_label_value_and_tone() {
        let html = render_to_string(|| {
            view! { <StatCard label="UNMARKED" value="37".to_string() tone=StatTone::Pending /> }
        });
        assert!(html.contains("UNMARKED"));
        assert!(html.contains("37"));
        assert!(html.contains("text-systemYellow"));
    }
}
