use crate::config::AppTimeZone;
use crate::utils::time::format_clock;
use chrono::Utc;
use leptos::*;

/// Short label for the zone shown next to the clock.
pub fn zone_label(time_zone: AppTimeZone) -> &'static str {
    match time_zone.name() {
        "Asia/Kolkata" | "Asia/Calcutta" => "IST",
        "UTC" | "Etc/UTC" => "UTC",
        other => other,
    }
}

#[component]
pub fn LiveClock(time_zone: AppTimeZone) -> impl IntoView {
    let (now, set_now) = create_signal(Utc::now());

    // Dropping the interval cancels it, so it lives as long as the component.
    #[cfg(target_arch = "wasm32")]
    store_value(gloo_timers::callback::Interval::new(1000, move || {
        set_now.set(Utc::now())
    }));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_now;

    view! {
        <div class="container-unibody border border-border p-4">
            <p class="text-hierarchy-5 mb-2">{format!("CURRENT TIME ({})", zone_label(time_zone))}</p>
            <p class="text-hierarchy-2 font-mono">{move || format_clock(time_zone, now.get())}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn clock_shows_zone_label() {
        let html = render_to_string(|| view! { <LiveClock time_zone=AppTimeZone::default()/> });
        assert!(html.contains("CURRENT TIME (IST)"));
    }

    #[test]
    fn unknown_zones_are_labelled_by_name() {
        let tokyo = AppTimeZone::parse("Asia/Tokyo").unwrap();
        assert_eq!(zone_label(tokyo), "Asia/Tokyo");
        assert_eq!(zone_label(AppTimeZone::parse("UTC").unwrap()), "UTC");
    }
}
