use crate::api::{ApiClient, ApiError, DashboardStats, QueryClient, QueryKey};

pub async fn fetch_stats(api: &ApiClient, query: &QueryClient) -> Result<DashboardStats, ApiError> {
    let api = api.clone();
    query
        .fetch(QueryKey::dashboard(), move || {
            let api = api.clone();
            async move { api.get_dashboard_stats().await }
        })
        .await
}
