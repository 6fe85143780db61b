use crate::api::{ApiClient, ApiError, AttendanceQuery, AttendanceRecord, QueryClient, QueryKey};
use crate::pages::attendance::utils::MarkIntent;
use chrono::NaiveDate;

pub async fn fetch_attendance_for_date(
    api: &ApiClient,
    query: &QueryClient,
    date: NaiveDate,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    let api = api.clone();
    query
        .fetch(QueryKey::attendance_for_date(date), move || {
            let api = api.clone();
            async move { api.list_attendance(&AttendanceQuery::for_date(date)).await }
        })
        .await
}

/// Every attendance view and the derived counts go stale after a mark.
pub fn invalidated_by_marking() -> [QueryKey; 3] {
    [
        QueryKey::attendance(),
        QueryKey::dashboard(),
        QueryKey::employees(),
    ]
}

pub async fn submit_mark(
    api: &ApiClient,
    query: &QueryClient,
    intent: &MarkIntent,
) -> Result<AttendanceRecord, ApiError> {
    let invalidates = invalidated_by_marking();
    match intent {
        MarkIntent::Create(payload) => {
            query
                .mutate(api.create_attendance(payload), &invalidates)
                .await
        }
        MarkIntent::Update { id, update } => {
            query
                .mutate(api.update_attendance(*id, update), &invalidates)
                .await
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::AttendanceStatus;
    use crate::pages::attendance::utils::resolve_mark;
    use crate::test_support::helpers::{day, employee, record, record_json};
    use serde_json::json;

    #[tokio::test]
    async fn marking_twice_creates_then_updates() {
        let server = MockServer::start();
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let query = QueryClient::new();
        let asha = employee("e1", "EMP-001", "Asha Rao");
        let date = day(2024, 1, 15);
        let created = record(7, &asha, date, AttendanceStatus::Present);
        let mut updated = created.clone();
        updated.status = AttendanceStatus::Absent;

        server.mock(|when, then| {
            when.method(GET)
                .path("/api/attendance/")
                .query_param("date", "2024-01-15");
            then.status(200).json_body(json!([])).times(1);
        });
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/attendance/")
                .query_param("date", "2024-01-15");
            then.status(200).json_body(json!([record_json(&created)]));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/attendance/");
            then.status(201).json_body(record_json(&created));
        });
        server.mock(|when, then| {
            when.method(PATCH).path("/api/attendance/7/");
            then.status(200).json_body(record_json(&updated));
        });

        for status in [AttendanceStatus::Present, AttendanceStatus::Absent] {
            let records = fetch_attendance_for_date(&api, &query, date).await.unwrap();
            let intent = resolve_mark(&records, &asha.id, date, status);
            submit_mark(&api, &query, &intent).await.unwrap();
        }

        assert_eq!(server.hits(&POST, "/api/attendance/"), 1);
        assert_eq!(server.hits(&PATCH, "/api/attendance/7/"), 1);
        let patch = server
            .received()
            .into_iter()
            .find(|r| r.method == PATCH)
            .unwrap();
        assert_eq!(patch.body, Some(json!({ "status": "ABSENT" })));
    }

    #[tokio::test]
    async fn rejected_mark_is_sent_once_and_decoded() {
        let server = MockServer::start();
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let query = QueryClient::new();
        server.mock(|when, then| {
            when.method(POST).path("/api/attendance/");
            then.status(400).json_body(json!({
                "non_field_errors": ["The fields employee, date must make a unique set."]
            }));
        });

        let intent = resolve_mark(&[], "e1", day(2024, 1, 15), AttendanceStatus::Present);
        let err = submit_mark(&api, &query, &intent).await.unwrap_err();
        assert_eq!(
            err.general_message_or(intent.fallback_message()),
            "The fields employee, date must make a unique set."
        );
        assert_eq!(server.hits(&POST, "/api/attendance/"), 1);
    }
}
