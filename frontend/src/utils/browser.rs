use web_sys::Window;

/// The browser window, or `None` when rendering on the host.
#[cfg(target_arch = "wasm32")]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Option<Window> {
    None
}

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn navigate(path: &str) {
    match window() {
        Some(w) => {
            if let Err(err) = w.location().set_href(path) {
                log::error!("Failed to navigate to {}: {:?}", path, err);
            }
        }
        None => log::debug!("navigate({}) ignored outside the browser", path),
    }
}

/// Client-side navigation when mounted under the router, a full page load otherwise.
pub fn use_app_navigate() -> leptos::Callback<String> {
    use leptos::use_context;
    use leptos_router::{use_navigate, NavigateOptions, RouterContext};

    if use_context::<RouterContext>().is_some() {
        let navigate = use_navigate();
        leptos::Callback::new(move |path: String| navigate(&path, NavigateOptions::default()))
    } else {
        leptos::Callback::new(move |path: String| navigate(&path))
    }
}

/// Router pathname when mounted under the router, the window location otherwise.
pub fn use_current_path() -> leptos::Signal<String> {
    use leptos::use_context;
    use leptos_router::{use_location, RouterContext};

    if use_context::<RouterContext>().is_some() {
        use_location().pathname.into()
    } else {
        let path = current_path();
        leptos::Signal::derive(move || path.clone())
    }
}

/// A path parameter of the enclosing route; always `None` outside a route.
pub fn use_route_param(name: &'static str) -> leptos::Signal<Option<String>> {
    use leptos::{use_context, SignalWith};
    use leptos_router::{use_params_map, RouteContext};

    if use_context::<RouteContext>().is_some() {
        let params = use_params_map();
        leptos::Signal::derive(move || params.with(|p| p.get(name).cloned()))
    } else {
        leptos::Signal::derive(|| None)
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_exposes_window_and_path() {
        assert!(window().is_some());
        assert!(current_path().starts_with('/'));
    }
}
