pub mod add_student;
pub mod sessions;
pub mod student_list;
pub mod uploader;
