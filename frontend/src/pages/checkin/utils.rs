use crate::{
    api::{CheckInFaceRequest, CheckInResult, CheckInStatus, CourseResponse, EnrollFaceRequest},
    utils::form::{required, FormError},
};

pub const READY_MESSAGE: &str = "Sẵn sàng điểm danh!";
pub const PHOTO_ACCEPT: &str = "image/*";

/// What the captured photo is sent for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceCommand {
    Enroll { student_id: String },
    CheckIn { course_id: i64 },
}

impl FaceCommand {
    pub fn enroll(student_id: &str) -> Result<Self, FormError> {
        Ok(FaceCommand::Enroll {
            student_id: required(student_id, "MSSV")?,
        })
    }

    pub fn check_in(course_id: Option<i64>) -> Result<Self, FormError> {
        course_id
            .map(|course_id| FaceCommand::CheckIn { course_id })
            .ok_or(FormError::MissingCourse)
    }

    pub fn progress_message(&self) -> &'static str {
        match self {
            FaceCommand::Enroll { .. } => "Đang xử lý đăng ký...",
            FaceCommand::CheckIn { .. } => "Đang gửi ảnh điểm danh...",
        }
    }

    pub fn failure_fallback(&self) -> &'static str {
        match self {
            FaceCommand::Enroll { .. } => "Lỗi khi đăng ký",
            FaceCommand::CheckIn { .. } => "Lỗi khi điểm danh",
        }
    }
}

#[derive(Debug, Clone)]
pub enum FaceOutcome {
    Enrolled { student_id: String },
    CheckedIn(CheckInResult),
}

/// The enrollment endpoint still wants a display name; the student id
/// stands in for it until the roster supplies the real one.
pub fn enroll_request(student_id: &str, image_base64: String) -> EnrollFaceRequest {
    EnrollFaceRequest {
        student_id: student_id.to_string(),
        name: student_id.to_string(),
        image_base64,
    }
}

pub fn check_in_request(course_id: i64, image_base64: String) -> CheckInFaceRequest {
    CheckInFaceRequest {
        course_id,
        image_base64,
    }
}

pub fn outcome_message(outcome: &FaceOutcome) -> String {
    match outcome {
        FaceOutcome::Enrolled { student_id } => {
            format!("Đăng ký thành công MSSV: {}", student_id)
        }
        FaceOutcome::CheckedIn(result) => {
            let status = match result.status {
                CheckInStatus::Present => "Có mặt",
                CheckInStatus::Late => "Đi muộn",
            };
            format!("Chào mừng, {}! ({})", result.name, status)
        }
    }
}

pub fn course_option_label(course: &CourseResponse) -> String {
    let code = course
        .course_code
        .as_deref()
        .filter(|code| !code.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| course.id.to_string());
    format!("{} (Mã: {})", course.name, code)
}

/// Explicit choice wins; otherwise the first listed course.
pub fn effective_course(selected: Option<i64>, courses: &[CourseResponse]) -> Option<i64> {
    selected
        .filter(|id| courses.iter().any(|course| course.id == *id))
        .or_else(|| courses.first().map(|course| course.id))
}
