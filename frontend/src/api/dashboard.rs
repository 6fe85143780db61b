use super::{
    client::ApiClient,
    types::{ApiError, DashboardStats},
};

impl ApiClient {
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let url = self.endpoint("/dashboard/").await;
        self.send_json(self.http_client().get(url)).await
    }
}
