use leptos::*;
use std::rc::Rc;

use super::{
    repository::CheckInRepository,
    utils::{effective_course, outcome_message, FaceCommand, FaceOutcome, READY_MESSAGE},
};
use crate::{
    api::{ApiClient, ApiError, CourseResponse},
    utils::{capture::read_file_as_data_url, FormError},
};

pub type CheckInCoursesResource = Resource<(), Result<Vec<CourseResponse>, ApiError>>;
pub type FaceAction = Action<(FaceCommand, web_sys::File), Result<FaceOutcome, ApiError>>;

#[derive(Clone, Copy)]
pub struct CheckInViewModel {
    pub courses: CheckInCoursesResource,
    pub selected_course: RwSignal<Option<i64>>,
    pub course_id: Signal<Option<i64>>,
    pub student_id: RwSignal<String>,
    pub photo: RwSignal<Option<web_sys::File>>,
    pub message: RwSignal<String>,
    pub action: FaceAction,
}

impl CheckInViewModel {
    pub fn busy(&self) -> Signal<bool> {
        self.action.pending().into()
    }

    pub fn enroll(&self) {
        let command = self.student_id.with_untracked(|id| FaceCommand::enroll(id));
        self.submit(command);
    }

    pub fn check_in(&self) {
        self.submit(FaceCommand::check_in(self.course_id.get_untracked()));
    }

    fn submit(&self, command: Result<FaceCommand, FormError>) {
        if self.action.pending().get_untracked() {
            return;
        }
        let command = match command {
            Ok(command) => command,
            Err(err) => return self.message.set(err.to_string()),
        };
        let Some(photo) = self.photo.get_untracked() else {
            return self.message.set(FormError::MissingPhoto.to_string());
        };
        self.message.set(command.progress_message().to_string());
        self.action.dispatch((command, photo));
    }

    pub fn finish(&self, result: Result<FaceOutcome, ApiError>) {
        match result {
            Ok(outcome) => {
                if matches!(outcome, FaceOutcome::Enrolled { .. }) {
                    self.student_id.set(String::new());
                }
                self.message.set(outcome_message(&outcome));
            }
            Err(err) => self.message.set(err.error),
        }
    }
}

pub fn use_check_in_view_model() -> CheckInViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = build_check_in_view_model(CheckInRepository::new_with_client(Rc::new(api)));
    create_effect(move |_| {
        if let Some(result) = vm.action.value().get() {
            vm.finish(result);
        }
    });
    vm
}

pub fn build_check_in_view_model(repository: CheckInRepository) -> CheckInViewModel {
    let repo_for_courses = repository.clone();
    let courses = create_resource(
        || (),
        move |_| {
            let repo = repo_for_courses.clone();
            async move { repo.fetch_courses().await }
        },
    );
    let selected_course = create_rw_signal(None::<i64>);
    let course_id = Signal::derive(move || {
        match courses.get() {
            Some(Ok(list)) => effective_course(selected_course.get(), &list),
            _ => None,
        }
    });

    let action = create_action(move |(command, photo): &(FaceCommand, web_sys::File)| {
        let repo = repository.clone();
        let command = command.clone();
        let photo = photo.clone();
        async move {
            let image = read_file_as_data_url(&photo)
                .await
                .map_err(ApiError::validation)?;
            let result = match &command {
                FaceCommand::Enroll { student_id } => repo
                    .enroll(student_id, image)
                    .await
                    .map(|_| FaceOutcome::Enrolled {
                        student_id: student_id.clone(),
                    }),
                FaceCommand::CheckIn { course_id } => repo
                    .check_in(*course_id, image)
                    .await
                    .map(FaceOutcome::CheckedIn),
            };
            result.map_err(|mut err| {
                if err.error.trim().is_empty() {
                    err.error = command.failure_fallback().to_string();
                }
                err
            })
        }
    });

    CheckInViewModel {
        courses,
        selected_course,
        course_id,
        student_id: create_rw_signal(String::new()),
        photo: create_rw_signal(None),
        message: create_rw_signal(READY_MESSAGE.to_string()),
        action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        api::{CheckInResult, CheckInStatus},
        test_support::{helpers::course, ssr::with_runtime},
    };

    fn with_offline_vm(f: impl FnOnce(CheckInViewModel)) {
        leptos_reactive::suppress_resource_load(true);
        with_runtime(|| {
            let vm = build_check_in_view_model(CheckInRepository::new_with_client(Rc::new(
                ApiClient::new_with_base_url("http://unused"),
            )));
            f(vm)
        });
        leptos_reactive::suppress_resource_load(false);
    }

    #[test]
    fn first_loaded_course_is_selected() {
        with_offline_vm(|vm| {
            assert_eq!(vm.course_id.get(), None);
            vm.courses
                .set(Ok(vec![course(4, "Rust", 1), course(9, "Mạng", 1)]));
            assert_eq!(vm.course_id.get(), Some(4));
            vm.selected_course.set(Some(9));
            assert_eq!(vm.course_id.get(), Some(9));
        });
    }

    #[test]
    fn validation_messages_replace_the_status_line() {
        with_offline_vm(|vm| {
            assert_eq!(vm.message.get(), READY_MESSAGE);
            vm.enroll();
            assert_eq!(vm.message.get(), "Vui lòng nhập MSSV.");

            vm.check_in();
            assert_eq!(vm.message.get(), "Vui lòng chọn môn học.");

            vm.courses.set(Ok(vec![course(4, "Rust", 1)]));
            vm.check_in();
            assert_eq!(vm.message.get(), "Vui lòng chụp ảnh khuôn mặt.");
            assert_eq!(vm.action.version().get(), 0);
        });
    }

    #[test]
    fn finished_enrollment_clears_student_id() {
        with_offline_vm(|vm| {
            vm.student_id.set("SV007".into());
            vm.finish(Ok(FaceOutcome::Enrolled {
                student_id: "SV007".into(),
            }));
            assert_eq!(vm.message.get(), "Đăng ký thành công MSSV: SV007");
            assert!(vm.student_id.get().is_empty());

            vm.finish(Ok(FaceOutcome::CheckedIn(CheckInResult {
                name: "Nguyễn Văn An".into(),
                student_id: None,
                status: CheckInStatus::Present,
                schedule_id: 10,
            })));
            assert_eq!(vm.message.get(), "Chào mừng, Nguyễn Văn An! (Có mặt)");

            vm.finish(Err(ApiError::from_status(400, "Sinh viên chưa ghi danh")));
            assert_eq!(vm.message.get(), "Sinh viên chưa ghi danh");
        });
    }
}
