use super::{
    client::ApiClient,
    types::{ApiError, CheckInFaceRequest, CheckInResult, EnrollFaceRequest, EnrollFaceResponse},
};

impl ApiClient {
    pub async fn enroll_face(
        &self,
        payload: &EnrollFaceRequest,
    ) -> Result<EnrollFaceResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .post(format!("{}/face_embedding/enroll", base_url))
            .json(payload);
        self.send_json(request).await
    }

    /// Matching, enrollment checks and present/late assignment are all
    /// decided by the backend.
    pub async fn check_in_face(
        &self,
        payload: &CheckInFaceRequest,
    ) -> Result<CheckInResult, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .post(format!("{}/face_embedding/search-face", base_url))
            .json(payload);
        self.send_json(request).await
    }
}
