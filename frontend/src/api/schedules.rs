use super::{
    client::ApiClient,
    types::{ApiError, SessionDetailResponse},
};

impl ApiClient {
    pub async fn get_session_detail(
        &self,
        session_id: i64,
    ) -> Result<SessionDetailResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .get(format!("{}/schedules/{}", base_url, session_id));
        self.send_json(request).await
    }
}
