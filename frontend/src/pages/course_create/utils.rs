use chrono_tz::Tz;

use crate::{
    api::{CreateCourseRequest, CreateLecturerRequest},
    utils::{
        form::{required, FormError},
        time::parse_datetime_local,
    },
};

pub const MIN_SESSIONS: u32 = 1;
pub const MAX_SESSIONS: u32 = 100;
pub const DEFAULT_SESSIONS: u32 = 15;

/// Raw input values of the create-course form. Times are the strings of
/// `datetime-local` inputs, read in the app time zone on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCourseFormState {
    pub name: String,
    pub course_code: String,
    pub lecturer_id: String,
    pub start: String,
    pub end: String,
    pub number_of_sessions: String,
    pub room: String,
}

impl Default for CreateCourseFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            course_code: String::new(),
            lecturer_id: String::new(),
            start: String::new(),
            end: String::new(),
            number_of_sessions: DEFAULT_SESSIONS.to_string(),
            room: String::new(),
        }
    }
}

impl CreateCourseFormState {
    pub fn to_request(&self, tz: Tz) -> Result<CreateCourseRequest, FormError> {
        let name = required(&self.name, "tên lớp học")?;
        let course_code = required(&self.course_code, "mã lớp học")?;
        let lecturer_id = self
            .lecturer_id
            .trim()
            .parse::<i64>()
            .map_err(|_| FormError::MissingLecturer)?;

        let sessions = required(&self.number_of_sessions, "số buổi học")?
            .parse::<u32>()
            .map_err(|_| FormError::NotANumber("Số buổi học"))?;
        if !(MIN_SESSIONS..=MAX_SESSIONS).contains(&sessions) {
            return Err(FormError::SessionCountOutOfRange {
                min: MIN_SESSIONS,
                max: MAX_SESSIONS,
            });
        }

        let start = required(&self.start, "thời gian bắt đầu")?;
        let end = required(&self.end, "thời gian kết thúc")?;
        let start = parse_datetime_local(&start, tz)
            .ok_or(FormError::InvalidDateTime("Thời gian bắt đầu"))?;
        let end = parse_datetime_local(&end, tz)
            .ok_or(FormError::InvalidDateTime("Thời gian kết thúc"))?;
        if end <= start {
            return Err(FormError::EndNotAfterStart);
        }

        let room = self.room.trim();
        Ok(CreateCourseRequest {
            name,
            course_code,
            lecturer_id: Some(lecturer_id),
            template_start_time: start,
            template_end_time: end,
            number_of_sessions: sessions,
            template_room: (!room.is_empty()).then(|| room.to_string()),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LecturerFormState {
    pub name: String,
    pub email: String,
}

impl LecturerFormState {
    pub fn to_request(&self) -> Result<CreateLecturerRequest, FormError> {
        let name = required(&self.name, "tên giảng viên")?;
        let email = required(&self.email, "email giảng viên")?;
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {
                Ok(CreateLecturerRequest { name, email })
            }
            _ => Err(FormError::InvalidEmail),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use chrono_tz::Asia::Ho_Chi_Minh;

    fn filled() -> CreateCourseFormState {
        CreateCourseFormState {
            name: " Công nghệ Web ".into(),
            course_code: "IT4409".into(),
            lecturer_id: "2".into(),
            start: "2025-02-03T07:00".into(),
            end: "2025-02-03T09:30".into(),
            number_of_sessions: "15".into(),
            room: "".into(),
        }
    }

    #[test]
    fn default_form_suggests_fifteen_sessions() {
        assert_eq!(CreateCourseFormState::default().number_of_sessions, "15");
    }

    #[test]
    fn valid_form_converts_local_times_to_utc() {
        let request = filled().to_request(Ho_Chi_Minh).unwrap();
        assert_eq!(request.name, "Công nghệ Web");
        assert_eq!(request.lecturer_id, Some(2));
        assert_eq!(request.number_of_sessions, 15);
        assert_eq!(
            request.template_start_time,
            Utc.with_ymd_and_hms(2025, 2, 3, 0, 0, 0).unwrap()
        );
        assert_eq!(
            request.template_end_time,
            Utc.with_ymd_and_hms(2025, 2, 3, 2, 30, 0).unwrap()
        );
        assert!(request.template_room.is_none());
    }

    #[test]
    fn room_is_sent_when_given() {
        let mut form = filled();
        form.room = " D9-301 ".into();
        let request = form.to_request(Ho_Chi_Minh).unwrap();
        assert_eq!(request.template_room.as_deref(), Some("D9-301"));
    }

    #[test]
    fn lecturer_must_be_selected() {
        let mut form = filled();
        form.lecturer_id = String::new();
        assert_eq!(form.to_request(Ho_Chi_Minh), Err(FormError::MissingLecturer));
    }

    #[test]
    fn session_count_is_bounded() {
        for (raw, expected) in [
            ("0", Err(FormError::SessionCountOutOfRange { min: 1, max: 100 })),
            ("101", Err(FormError::SessionCountOutOfRange { min: 1, max: 100 })),
            ("abc", Err(FormError::NotANumber("Số buổi học"))),
        ] {
            let mut form = filled();
            form.number_of_sessions = raw.into();
            assert_eq!(form.to_request(Ho_Chi_Minh).map(|r| r.number_of_sessions), expected);
        }
        let mut form = filled();
        form.number_of_sessions = "100".into();
        assert_eq!(form.to_request(Ho_Chi_Minh).unwrap().number_of_sessions, 100);
    }

    #[test]
    fn end_must_follow_start() {
        let mut form = filled();
        form.end = form.start.clone();
        assert_eq!(form.to_request(Ho_Chi_Minh), Err(FormError::EndNotAfterStart));

        form.end = "tomorrow".into();
        assert_eq!(
            form.to_request(Ho_Chi_Minh),
            Err(FormError::InvalidDateTime("Thời gian kết thúc"))
        );
    }

    #[test]
    fn lecturer_form_checks_email_shape() {
        let mut form = LecturerFormState {
            name: "Lê Thị D".into(),
            email: "le.d".into(),
        };
        assert_eq!(form.to_request().unwrap_err(), FormError::InvalidEmail);
        form.email = " d@example.edu ".into();
        assert_eq!(form.to_request().unwrap().email, "d@example.edu");
    }
}
