use crate::api::{ApiClient, ApiError, CourseResponse};
use log::error;
use std::rc::Rc;

#[derive(Clone)]
pub struct CourseListRepository {
    client: Rc<ApiClient>,
}

impl CourseListRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_courses(&self) -> Result<Vec<CourseResponse>, ApiError> {
        self.client
            .list_courses()
            .await
            .inspect_err(|err| error!("failed to load courses: {}", err))
    }
}
