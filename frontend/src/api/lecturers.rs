use super::{
    client::ApiClient,
    types::{ApiError, CreateLecturerRequest, Lecturer},
};

impl ApiClient {
    pub async fn list_lecturers(&self) -> Result<Vec<Lecturer>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.http_client().get(format!("{}/lecturers", base_url));
        self.send_json(request).await
    }

    pub async fn create_lecturer(
        &self,
        payload: &CreateLecturerRequest,
    ) -> Result<Lecturer, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .post(format!("{}/lecturers", base_url))
            .json(payload);
        self.send_json(request).await
    }
}
