pub mod checkin;
pub mod course_create;
pub mod course_detail;
pub mod course_list;
pub mod session_detail;
