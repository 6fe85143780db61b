use crate::api::{
    ApiClient, ApiError, AttendanceQuery, AttendanceRecord, AttendanceStatus, QueryClient,
    QueryKey,
};

/// The status filter goes to the server; date bounds are applied locally.
pub async fn fetch_report(
    api: &ApiClient,
    query: &QueryClient,
    status: Option<AttendanceStatus>,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    let api = api.clone();
    query
        .fetch(QueryKey::attendance_report(status), move || {
            let api = api.clone();
            async move { api.list_attendance(&AttendanceQuery::with_status(status)).await }
        })
        .await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn each_status_is_cached_separately() {
        let server = MockServer::start();
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let query = QueryClient::new();
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance/");
            then.status(200).json_body(json!([]));
        });

        fetch_report(&api, &query, None).await.unwrap();
        fetch_report(&api, &query, Some(AttendanceStatus::Present)).await.unwrap();
        fetch_report(&api, &query, None).await.unwrap();

        let received = server.received();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].query_value("status"), None);
        assert_eq!(received[1].query_value("status"), Some("PRESENT"));
    }
}
