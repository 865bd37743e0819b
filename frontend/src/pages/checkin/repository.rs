use crate::api::{ApiClient, ApiError, CheckInResult, CourseResponse};
use log::{error, info};
use std::rc::Rc;

use super::utils::{check_in_request, enroll_request};

#[derive(Clone)]
pub struct CheckInRepository {
    client: Rc<ApiClient>,
}

impl CheckInRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_courses(&self) -> Result<Vec<CourseResponse>, ApiError> {
        self.client
            .list_courses()
            .await
            .inspect_err(|err| error!("failed to load courses for check-in: {}", err))
    }

    pub async fn enroll(&self, student_id: &str, image_base64: String) -> Result<(), ApiError> {
        let response = self
            .client
            .enroll_face(&enroll_request(student_id, image_base64))
            .await?;
        info!("enrolled face for profile {}", response.data.id);
        Ok(())
    }

    pub async fn check_in(
        &self,
        course_id: i64,
        image_base64: String,
    ) -> Result<CheckInResult, ApiError> {
        let result = self
            .client
            .check_in_face(&check_in_request(course_id, image_base64))
            .await?;
        info!(
            "checked in {:?} for schedule {} as {:?}",
            result.student_id, result.schedule_id, result.status
        );
        Ok(result)
    }
}

#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod tests {
    use super::*;
    use crate::api::{test_support::mock::*, CheckInStatus};
    use serde_json::json;

    fn repository(server: &MockServer) -> CheckInRepository {
        CheckInRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/course-api"),
        )))
    }

    #[tokio::test]
    async fn enroll_sends_student_id_as_name() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/course-api/face_embedding/enroll");
            then.status(200).json_body(json!({
                "data": { "id": 5, "student_id": "SV007", "name": "SV007", "role": "student" }
            }));
        });
        repository(&server)
            .enroll("SV007", "data:image/jpeg;base64,AA==".into())
            .await
            .unwrap();
        let body = server.requests()[0].body.clone().unwrap();
        assert_eq!(body["studentId"], "SV007");
        assert_eq!(body["name"], "SV007");
    }

    #[tokio::test]
    async fn check_in_reports_backend_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/course-api/face_embedding/search-face");
            then.status(200).json_body(json!({
                "name": "Nguyễn Văn An",
                "student_id": "SV001",
                "status": "late",
                "schedule_id": 10
            }));
        });
        let result = repository(&server)
            .check_in(3, "data:image/jpeg;base64,AA==".into())
            .await
            .unwrap();
        assert_eq!(result.status, CheckInStatus::Late);
        assert_eq!(server.requests()[0].body.clone().unwrap()["course_id"], 3);
    }

    #[tokio::test]
    async fn unknown_face_surfaces_detail() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/course-api/face_embedding/search-face");
            then.status(404)
                .json_body(json!({ "detail": "Không nhận diện được khuôn mặt" }));
        });
        let err = repository(&server)
            .check_in(3, "data:image/jpeg;base64,AA==".into())
            .await
            .unwrap_err();
        assert_eq!(err.code, "NOT_FOUND");
        assert_eq!(err.error, "Không nhận diện được khuôn mặt");
    }
}
