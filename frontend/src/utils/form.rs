use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Vui lòng nhập {0}.")]
    Required(&'static str),
    #[error("Vui lòng chọn file.")]
    MissingFile,
    #[error("Vui lòng chọn giảng viên.")]
    MissingLecturer,
    #[error("Vui lòng chọn môn học.")]
    MissingCourse,
    #[error("Vui lòng chụp ảnh khuôn mặt.")]
    MissingPhoto,
    #[error("Email không hợp lệ.")]
    InvalidEmail,
    #[error("{0} phải là số.")]
    NotANumber(&'static str),
    #[error("{0} không hợp lệ.")]
    InvalidDateTime(&'static str),
    #[error("Thời gian kết thúc phải sau thời gian bắt đầu.")]
    EndNotAfterStart,
    #[error("Số buổi học phải từ {min} đến {max}.")]
    SessionCountOutOfRange { min: u32, max: u32 },
}

impl From<FormError> for ApiError {
    fn from(error: FormError) -> Self {
        ApiError::validation(error.to_string())
    }
}

/// Trimmed value, or `FormError::Required` naming the field.
pub fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_and_rejects_blank() {
        assert_eq!(required("  SV001 ", "mã sinh viên"), Ok("SV001".to_string()));
        assert_eq!(
            required("   ", "họ và tên"),
            Err(FormError::Required("họ và tên"))
        );
    }

    #[test]
    fn form_errors_become_validation_api_errors() {
        let err: ApiError = FormError::SessionCountOutOfRange { min: 1, max: 100 }.into();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.error, "Số buổi học phải từ 1 đến 100.");
        let err: ApiError = FormError::Required("tên lớp").into();
        assert_eq!(err.error, "Vui lòng nhập tên lớp.");
    }
}
