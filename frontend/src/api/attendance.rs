use super::{
    client::ApiClient,
    types::{ApiError, AttendanceCreate, AttendanceQuery, AttendanceRecord, AttendanceUpdate},
};

impl ApiClient {
    pub async fn list_attendance(
        &self,
        query: &AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self.endpoint("/attendance/").await;
        self.send_json(self.http_client().get(url).query(query))
            .await
    }

    pub async fn get_attendance(&self, id: i64) -> Result<AttendanceRecord, ApiError> {
        let url = self.endpoint(&format!("/attendance/{}/", id)).await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn create_attendance(
        &self,
        payload: &AttendanceCreate,
    ) -> Result<AttendanceRecord, ApiError> {
        let url = self.endpoint("/attendance/").await;
        self.send_json(self.http_client().post(url).json(payload))
            .await
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        payload: &AttendanceUpdate,
    ) -> Result<AttendanceRecord, ApiError> {
        let url = self.endpoint(&format!("/attendance/{}/", id)).await;
        self.send_json(self.http_client().patch(url).json(payload))
            .await
    }

    pub async fn delete_attendance(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/attendance/{}/", id)).await;
        self.send_empty(self.http_client().delete(url)).await
    }
}
