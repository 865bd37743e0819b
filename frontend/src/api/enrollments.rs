use reqwest::multipart::{Form, Part};

use super::{
    client::ApiClient,
    types::{
        AddStudentRequest, AddStudentResponse, ApiError, EnrollmentPage, EnrollmentSearchFilter,
        UploadEnrollmentResponse,
    },
};

impl ApiClient {
    pub async fn search_enrollments(
        &self,
        filter: &EnrollmentSearchFilter,
    ) -> Result<EnrollmentPage, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .post(format!("{}/enrollments/search", base_url))
            .json(filter);
        self.send_json(request).await
    }

    pub async fn add_student_to_course(
        &self,
        course_id: i64,
        payload: &AddStudentRequest,
    ) -> Result<AddStudentResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .post(format!("{}/enrollments/{}/students", base_url, course_id))
            .json(payload);
        self.send_json(request).await
    }

    /// Uploads a CSV/Excel roster; parsing happens server side.
    pub async fn upload_enrollment_file(
        &self,
        course_id: i64,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<UploadEnrollmentResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let form = Form::new()
            .text("course_id", course_id.to_string())
            .part("file", Part::bytes(contents).file_name(file_name.to_string()));
        let request = self
            .http_client()
            .post(format!("{}/enrollments/upload", base_url))
            .multipart(form);
        self.send_json(request).await
    }
}
