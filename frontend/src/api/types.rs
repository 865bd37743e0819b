use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config;

/// Parses a backend timestamp. Values without an offset are wall-clock
/// times in `tz`.
pub fn parse_backend_datetime(raw: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

mod backend_datetime {
    use super::*;
    use serde::de::Error;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_backend_datetime(&raw, config::current_time_zone())
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub mod option {
        use super::*;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) if !raw.trim().is_empty() => {
                    parse_backend_datetime(&raw, config::current_time_zone())
                        .map(Some)
                        .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
                }
                _ => Ok(None),
            }
        }
    }
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSimple {
    pub id: i64,
    #[serde(deserialize_with = "backend_datetime::deserialize")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "backend_datetime::deserialize")]
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub course_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LecturerProfile {
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseLecturer {
    pub id: i64,
    #[serde(default)]
    pub profile: Option<LecturerProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub lecturer: Option<CourseLecturer>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub schedules: Vec<ScheduleSimple>,
}

impl CourseResponse {
    pub fn lecturer_name(&self) -> Option<&str> {
        self.lecturer
            .as_ref()
            .and_then(|lecturer| lecturer.profile.as_ref())
            .and_then(|profile| profile.full_name.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub course_code: String,
    pub lecturer_id: Option<i64>,
    pub template_start_time: DateTime<Utc>,
    pub template_end_time: DateTime<Utc>,
    pub number_of_sessions: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_room: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecturer {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLecturerRequest {
    pub name: String,
    pub email: String,
}

/// Student profile as embedded in session payloads. Both fields may be
/// missing on malformed records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSimple {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckInStatus {
    Present,
    Late,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceLogEntry {
    #[serde(default, deserialize_with = "backend_datetime::option::deserialize")]
    pub check_in_time: Option<DateTime<Utc>>,
    pub status: CheckInStatus,
    #[serde(default)]
    pub profile: Option<ProfileSimple>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDetailResponse {
    pub schedule: ScheduleSimple,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub attendees: Vec<AttendanceLogEntry>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub absentees: Vec<ProfileSimple>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentSearchFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl EnrollmentSearchFilter {
    pub fn for_course(course_id: i64, student_name: &str) -> Self {
        Self {
            course_id: Some(course_id),
            student_id: None,
            student_name: Some(student_name.to_string()),
            page: 1,
            page_size: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrolledStudent {
    pub enrollment_id: i64,
    #[serde(default)]
    pub course_id: Option<i64>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub profile_id: Option<i64>,
    #[serde(default)]
    pub attended_count: u32,
    #[serde(default)]
    pub total_sessions: u32,
    #[serde(default)]
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentPage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub data: Vec<EnrolledStudent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddStudentRequest {
    pub name: String,
    pub student_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddStudentResponse {
    pub message: String,
    #[serde(default)]
    pub profile_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadEnrollmentResponse {
    #[serde(default)]
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollFaceRequest {
    #[serde(rename = "studentId")]
    pub student_id: String,
    pub name: String,
    pub image_base64: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilePublic {
    pub id: i64,
    #[serde(default)]
    pub student_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollFaceResponse {
    pub data: ProfilePublic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInFaceRequest {
    pub course_id: i64,
    pub image_base64: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInResult {
    pub name: String,
    #[serde(default)]
    pub student_id: Option<String>,
    pub status: CheckInStatus,
    pub schedule_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn from_status(status: u16, msg: impl Into<String>) -> Self {
        let code = match status {
            400 => "BAD_REQUEST".to_string(),
            403 => "FORBIDDEN".to_string(),
            404 => "NOT_FOUND".to_string(),
            409 => "CONFLICT".to_string(),
            422 => "VALIDATION_ERROR".to_string(),
            500..=599 => "SERVER_ERROR".to_string(),
            other => format!("HTTP_{other}"),
        };
        Self {
            error: msg.into(),
            code,
            details: None,
        }
    }

    /// Decodes a FastAPI error body (`{"detail": "..."}` or a list of
    /// validation objects) into an error carrying the status code.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let fallback = format!("Yêu cầu thất bại (HTTP {status})");
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return Self::from_status(status, fallback);
        };
        match value.get("detail") {
            Some(Value::String(message)) if !message.is_empty() => {
                Self::from_status(status, message.clone())
            }
            Some(Value::Array(items)) => {
                let messages: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                    .map(str::to_string)
                    .collect();
                let summary = messages.first().cloned().unwrap_or(fallback);
                let mut error = Self::from_status(status, summary);
                error.details = Some(serde_json::json!({ "errors": messages }));
                error
            }
            _ => Self::from_status(status, fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.details.is_none());

        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");
        assert_eq!(ApiError::from_status(404, "x").code, "NOT_FOUND");
        assert_eq!(ApiError::from_status(503, "x").code, "SERVER_ERROR");
        assert_eq!(ApiError::from_status(418, "x").code, "HTTP_418");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn api_error_decodes_fastapi_detail_string() {
        let error = ApiError::from_response_body(404, r#"{"detail":"Không tìm thấy buổi học"}"#);
        assert_eq!(error.code, "NOT_FOUND");
        assert_eq!(error.error, "Không tìm thấy buổi học");
    }

    #[test]
    fn api_error_decodes_fastapi_validation_list() {
        let body = json!({
            "detail": [
                { "loc": ["body", "name"], "msg": "field required", "type": "missing" },
                { "loc": ["body", "student_id"], "msg": "field required", "type": "missing" }
            ]
        })
        .to_string();
        let error = ApiError::from_response_body(422, &body);
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.error, "field required");
        let details = error.details.expect("details");
        assert_eq!(details["errors"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn api_error_falls_back_on_unparseable_body() {
        let error = ApiError::from_response_body(502, "<html>Bad gateway</html>");
        assert_eq!(error.code, "SERVER_ERROR");
        assert!(error.error.contains("502"));
    }

    #[test]
    fn parses_offset_and_naive_timestamps() {
        let utc = parse_backend_datetime("2025-01-10T09:00:00+07:00", chrono_tz::UTC).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2025, 1, 10, 2, 0, 0).unwrap());

        let naive =
            parse_backend_datetime("2025-01-10T09:00:00", chrono_tz::Asia::Ho_Chi_Minh).unwrap();
        assert_eq!(naive, Utc.with_ymd_and_hms(2025, 1, 10, 2, 0, 0).unwrap());

        let fractional = parse_backend_datetime("2025-01-10T09:05:12.345678Z", chrono_tz::UTC);
        assert!(fractional.is_some());
        assert!(parse_backend_datetime("yesterday", chrono_tz::UTC).is_none());
    }

    #[test]
    fn session_detail_tolerates_null_collections_and_missing_profiles() {
        let raw = json!({
            "schedule": {
                "id": 7,
                "start_time": "2025-01-10T09:00:00Z",
                "end_time": "2025-01-10T11:00:00Z",
                "room": null,
                "course_id": 3
            },
            "attendees": [
                { "check_in_time": "2025-01-10T09:05:00Z", "status": "late", "profile": null }
            ],
            "absentees": null
        });
        let detail: SessionDetailResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(detail.schedule.course_id, Some(3));
        assert!(detail.schedule.room.is_none());
        assert_eq!(detail.attendees.len(), 1);
        assert_eq!(detail.attendees[0].status, CheckInStatus::Late);
        assert!(detail.attendees[0].profile.is_none());
        assert!(detail.absentees.is_empty());
    }

    #[test]
    fn enrollment_filter_omits_unset_fields() {
        let value = serde_json::to_value(EnrollmentSearchFilter::for_course(4, "an")).unwrap();
        assert_eq!(
            value,
            json!({ "course_id": 4, "student_name": "an", "page": 1, "page_size": 1000 })
        );
    }

    #[test]
    fn enroll_face_request_uses_backend_field_names() {
        let value = serde_json::to_value(EnrollFaceRequest {
            student_id: "B21DCCN001".into(),
            name: "B21DCCN001".into(),
            image_base64: "data:image/jpeg;base64,AAAA".into(),
        })
        .unwrap();
        assert_eq!(value["studentId"], "B21DCCN001");
        assert!(value.get("student_id").is_none());
    }

    #[test]
    fn course_exposes_lecturer_name_when_present() {
        let course: CourseResponse = serde_json::from_value(json!({
            "id": 1,
            "name": "Lập trình Rust",
            "course_code": "INT1234",
            "lecturer": { "id": 2, "profile": { "id": 9, "full_name": "Trần Thị B", "role": "lecturer" } },
            "schedules": []
        }))
        .unwrap();
        assert_eq!(course.lecturer_name(), Some("Trần Thị B"));
    }
}
