use crate::api::{
    ApiClient, ApiError, CourseResponse, CreateCourseRequest, CreateLecturerRequest, Lecturer,
};
use log::{error, info};
use std::rc::Rc;

#[derive(Clone)]
pub struct CourseCreateRepository {
    client: Rc<ApiClient>,
}

impl CourseCreateRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_lecturers(&self) -> Result<Vec<Lecturer>, ApiError> {
        self.client
            .list_lecturers()
            .await
            .inspect_err(|err| error!("failed to load lecturers: {}", err))
    }

    pub async fn create_lecturer(
        &self,
        request: CreateLecturerRequest,
    ) -> Result<Lecturer, ApiError> {
        self.client.create_lecturer(&request).await
    }

    pub async fn create_course(
        &self,
        request: CreateCourseRequest,
    ) -> Result<CourseResponse, ApiError> {
        let created = self.client.create_course(&request).await?;
        info!(
            "created course {} ({}) with {} sessions",
            created.id,
            request.course_code,
            created.schedules.len()
        );
        Ok(created)
    }
}
