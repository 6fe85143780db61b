use crate::utils::browser::use_current_path;
use leptos::*;

pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "DASHBOARD"),
    ("/employees", "EMPLOYEES"),
    ("/attendance", "ATTENDANCE"),
    ("/attendance/bulk", "BULK ATTENDANCE"),
    ("/attendance/reports", "REPORTS"),
];

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "block px-4 py-2 border border-systemBlue bg-systemBlue text-surface"
    } else {
        "block px-4 py-2 border border-border text-fg hover:border-fg hover:bg-fg hover:text-surface"
    }
}

#[component]
pub fn Navigation(#[prop(into)] current_path: Signal<String>) -> impl IntoView {
    view! {
        <nav class="w-64 shrink-0 border-r border-border bg-surface flex flex-col">
            <div class="p-4 mb-4">
                <h1 class="text-hierarchy-1">"HRMS LITE"</h1>
            </div>
            <ul class="space-y-2 px-4">
                {NAV_ITEMS
                    .iter()
                    .map(|(path, label)| {
                        let is_active = move || current_path.get() == *path;
                        view! {
                            <li>
                                <a
                                    href=*path
                                    class=move || nav_link_class(is_active())
                                    aria-current=move || is_active().then_some("page")
                                >
                                    {format!("[ {} ]", label)}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let current_path = use_current_path();
    view! {
        <div class="min-h-screen flex bg-surface text-fg font-mono">
            <Navigation current_path=current_path/>
            <main class="flex-1 p-6 md:p-8 overflow-x-auto">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <p class="status-loading cursor-blink">{label.unwrap_or_else(|| "LOADING".to_string())}</p>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <p class="status-error my-4">{format!("[ ERROR: {} ]", message)}</p>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <p class="status-success my-4">{format!("[ {} ]", message)}</p>
    }
}

#[component]
pub fn InfoMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <p class="text-fg my-4">{format!("[ {} ]", message)}</p>
    }
}
