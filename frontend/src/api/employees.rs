use super::{
    client::ApiClient,
    types::{ApiError, Employee, EmployeePayload},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/employees/").await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn get_employee(&self, id: &str) -> Result<Employee, ApiError> {
        let url = self.endpoint(&format!("/employees/{}/", id)).await;
        self.send_json(self.http_client().get(url)).await
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee, ApiError> {
        let url = self.endpoint("/employees/").await;
        self.send_json(self.http_client().post(url).json(payload))
            .await
    }

    pub async fn update_employee(
        &self,
        id: &str,
        payload: &EmployeePayload,
    ) -> Result<Employee, ApiError> {
        let url = self.endpoint(&format!("/employees/{}/", id)).await;
        self.send_json(self.http_client().patch(url).json(payload))
            .await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/employees/{}/", id)).await;
        self.send_empty(self.http_client().delete(url)).await
    }
}
