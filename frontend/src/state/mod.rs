pub mod query;
pub mod time_zone;

use crate::api::ApiClient;
use leptos::*;

/// Client provided at the app root, or one using the runtime config.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(ApiClient::new)
}
