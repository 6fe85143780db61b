use crate::config::{self, AppTimeZone};
use leptos::*;

/// Zone provided at the app root, or the configured one when rendered standalone.
pub fn use_time_zone() -> AppTimeZone {
    use_context::<AppTimeZone>().unwrap_or_else(config::current_time_zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn provided_zone_wins() {
        with_runtime(|| {
            assert_eq!(use_time_zone(), AppTimeZone::default());
            let utc = AppTimeZone::parse("UTC").unwrap();
            provide_context(utc);
            assert_eq!(use_time_zone(), utc);
        });
    }
}
