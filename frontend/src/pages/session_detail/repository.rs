use crate::api::{ApiClient, ApiError, SessionDetailResponse};
use log::{debug, error};
use std::rc::Rc;

#[derive(Clone)]
pub struct SessionDetailRepository {
    client: Rc<ApiClient>,
}

impl SessionDetailRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_session(&self, session_id: i64) -> Result<SessionDetailResponse, ApiError> {
        match self.client.get_session_detail(session_id).await {
            Ok(detail) => {
                debug!(
                    "session {} loaded: {} checked in, {} not checked in",
                    session_id,
                    detail.attendees.len(),
                    detail.absentees.len()
                );
                Ok(detail)
            }
            Err(err) => {
                error!("failed to load session {}: {} ({})", session_id, err, err.code);
                Err(err)
            }
        }
    }
}
