use crate::api::{
    ApiClient, ApiError, AttendanceQuery, AttendanceRecord, Employee, EmployeePayload,
    QueryClient, QueryKey,
};

pub async fn fetch_employees(
    api: &ApiClient,
    query: &QueryClient,
) -> Result<Vec<Employee>, ApiError> {
    let api = api.clone();
    query
        .fetch(QueryKey::employees(), move || {
            let api = api.clone();
            async move { api.list_employees().await }
        })
        .await
}

pub async fn fetch_employee(
    api: &ApiClient,
    query: &QueryClient,
    id: &str,
) -> Result<Employee, ApiError> {
    let api = api.clone();
    let id = id.to_string();
    query
        .fetch(QueryKey::employee(&id), move || {
            let api = api.clone();
            let id = id.clone();
            async move { api.get_employee(&id).await }
        })
        .await
}

pub async fn fetch_employee_attendance(
    api: &ApiClient,
    query: &QueryClient,
    id: &str,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    let api = api.clone();
    let filter = AttendanceQuery::for_employee(id);
    query
        .fetch(QueryKey::attendance_for_employee(id), move || {
            let api = api.clone();
            let filter = filter.clone();
            async move { api.list_attendance(&filter).await }
        })
        .await
}

pub async fn create_employee(
    api: &ApiClient,
    query: &QueryClient,
    payload: &EmployeePayload,
) -> Result<Employee, ApiError> {
    query
        .mutate(
            api.create_employee(payload),
            &[QueryKey::employees(), QueryKey::dashboard()],
        )
        .await
}

pub async fn update_employee(
    api: &ApiClient,
    query: &QueryClient,
    id: &str,
    payload: &EmployeePayload,
) -> Result<Employee, ApiError> {
    query
        .mutate(
            api.update_employee(id, payload),
            &[QueryKey::employees(), QueryKey::employee(id)],
        )
        .await
}

/// Deleting an employee cascades to their attendance server-side.
pub async fn delete_employee(
    api: &ApiClient,
    query: &QueryClient,
    id: &str,
) -> Result<(), ApiError> {
    query
        .mutate(
            api.delete_employee(id),
            &[
                QueryKey::employees(),
                QueryKey::employee(id),
                QueryKey::attendance(),
                QueryKey::dashboard(),
            ],
        )
        .await
}
