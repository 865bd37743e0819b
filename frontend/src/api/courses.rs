use super::{
    client::ApiClient,
    types::{ApiError, CourseResponse, CreateCourseRequest},
};

impl ApiClient {
    pub async fn list_courses(&self) -> Result<Vec<CourseResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.http_client().get(format!("{}/courses", base_url));
        self.send_json(request).await
    }

    pub async fn get_course(&self, course_id: i64) -> Result<CourseResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .get(format!("{}/courses/{}", base_url, course_id));
        self.send_json(request).await
    }

    /// The backend also materialises one schedule per week for
    /// `number_of_sessions` weeks.
    pub async fn create_course(
        &self,
        payload: &CreateCourseRequest,
    ) -> Result<CourseResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .post(format!("{}/courses", base_url))
            .json(payload);
        self.send_json(request).await
    }
}
