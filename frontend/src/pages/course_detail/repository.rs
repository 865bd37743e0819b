use crate::api::{
    AddStudentRequest, AddStudentResponse, ApiClient, ApiError, CourseResponse, EnrolledStudent,
    EnrollmentSearchFilter, UploadEnrollmentResponse,
};
use log::{debug, error};
use std::rc::Rc;

use super::utils::EnrollmentUpload;

#[derive(Clone)]
pub struct CourseDetailRepository {
    client: Rc<ApiClient>,
}

impl CourseDetailRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_course(&self, course_id: i64) -> Result<CourseResponse, ApiError> {
        self.client.get_course(course_id).await.inspect_err(|err| {
            error!("failed to load course {}: {}", course_id, err);
        })
    }

    /// Server-side search over the course's enrollments. An empty query
    /// lists everyone.
    pub async fn search_students(
        &self,
        course_id: i64,
        query: &str,
    ) -> Result<Vec<EnrolledStudent>, ApiError> {
        let filter = EnrollmentSearchFilter::for_course(course_id, query);
        match self.client.search_enrollments(&filter).await {
            Ok(page) => {
                debug!(
                    "course {} search '{}' returned {} of {}",
                    course_id,
                    query,
                    page.data.len(),
                    page.total
                );
                Ok(page.data)
            }
            Err(err) => {
                error!("student search failed for course {}: {}", course_id, err);
                Err(err)
            }
        }
    }

    pub async fn add_student(
        &self,
        course_id: i64,
        request: AddStudentRequest,
    ) -> Result<AddStudentResponse, ApiError> {
        self.client.add_student_to_course(course_id, &request).await
    }

    pub async fn upload_roster(
        &self,
        course_id: i64,
        upload: EnrollmentUpload,
    ) -> Result<UploadEnrollmentResponse, ApiError> {
        self.client
            .upload_enrollment_file(course_id, &upload.file_name, upload.contents)
            .await
    }
}
