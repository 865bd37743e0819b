#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{
        AttendanceLogEntry, CheckInStatus, CourseResponse, EnrolledStudent, ProfileSimple,
        ScheduleSimple, SessionDetailResponse,
    };
    use chrono::{DateTime, Duration, TimeZone, Utc};

    /// 09:00 in Ho Chi Minh City on 2025-01-10.
    pub fn session_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, 2, 0, 0).unwrap()
    }

    pub fn schedule(id: i64, start: DateTime<Utc>) -> ScheduleSimple {
        ScheduleSimple {
            id,
            start_time: start,
            end_time: start + Duration::hours(2),
            room: Some("A2-301".into()),
            course_id: Some(3),
        }
    }

    pub fn profile(name: &str, student_id: &str) -> ProfileSimple {
        ProfileSimple {
            name: Some(name.into()),
            student_id: Some(student_id.into()),
        }
    }

    pub fn checked_in(
        name: &str,
        student_id: &str,
        status: CheckInStatus,
        at: DateTime<Utc>,
    ) -> AttendanceLogEntry {
        AttendanceLogEntry {
            check_in_time: Some(at),
            status,
            profile: Some(profile(name, student_id)),
        }
    }

    pub fn session_detail(
        attendees: Vec<AttendanceLogEntry>,
        absentees: Vec<ProfileSimple>,
    ) -> SessionDetailResponse {
        SessionDetailResponse {
            schedule: schedule(10, session_start()),
            attendees,
            absentees,
        }
    }

    pub fn course(id: i64, name: &str, sessions: usize) -> CourseResponse {
        CourseResponse {
            id,
            name: name.into(),
            course_code: Some(format!("INT{:04}", id)),
            lecturer: None,
            schedules: (0..sessions)
                .map(|week| schedule(100 + week as i64, session_start() + Duration::weeks(week as i64)))
                .collect(),
        }
    }

    pub fn enrolled_student(id: i64, name: &str, attended: u32, total: u32) -> EnrolledStudent {
        let rate = if total == 0 {
            0.0
        } else {
            f64::from(attended) * 100.0 / f64::from(total)
        };
        EnrolledStudent {
            enrollment_id: id,
            course_id: Some(3),
            student_id: Some(format!("SV{:03}", id)),
            student_name: Some(name.into()),
            profile_id: Some(id + 100),
            attended_count: attended,
            total_sessions: total,
            attendance_rate: rate,
        }
    }
}
