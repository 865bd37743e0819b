use chrono_tz::Tz;
use leptos::*;
use log::warn;
use std::rc::Rc;

use super::{
    repository::CourseCreateRepository,
    utils::{CreateCourseFormState, LecturerFormState},
};
use crate::{
    api::{ApiClient, ApiError, CourseResponse, CreateCourseRequest, CreateLecturerRequest, Lecturer},
    utils::MessageState,
};

pub type LecturersResource = Resource<u32, Result<Vec<Lecturer>, ApiError>>;

#[derive(Clone, Copy)]
pub struct CourseCreateViewModel {
    pub lecturer_reload: RwSignal<u32>,
    pub lecturers: LecturersResource,
    pub form: RwSignal<CreateCourseFormState>,
    pub messages: RwSignal<MessageState>,
    pub create_action: Action<CreateCourseRequest, Result<CourseResponse, ApiError>>,
    pub show_add_lecturer: RwSignal<bool>,
    pub lecturer_form: RwSignal<LecturerFormState>,
    pub lecturer_messages: RwSignal<MessageState>,
    pub add_lecturer_action: Action<CreateLecturerRequest, Result<Lecturer, ApiError>>,
    on_created: Callback<i64>,
}

impl CourseCreateViewModel {
    pub fn submit_course(&self, tz: Tz) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        match self.form.with_untracked(|form| form.to_request(tz)) {
            Ok(request) => {
                self.messages.update(MessageState::clear);
                self.create_action.dispatch(request);
            }
            Err(err) => self.messages.update(|m| m.set_error(err.to_string())),
        }
    }

    pub fn submit_lecturer(&self) {
        if self.add_lecturer_action.pending().get_untracked() {
            return;
        }
        match self.lecturer_form.with_untracked(LecturerFormState::to_request) {
            Ok(request) => {
                self.lecturer_messages.update(MessageState::clear);
                self.add_lecturer_action.dispatch(request);
            }
            Err(err) => self.lecturer_messages.update(|m| m.set_error(err.to_string())),
        }
    }

    pub fn toggle_add_lecturer(&self) {
        self.show_add_lecturer.update(|open| *open = !*open);
        self.lecturer_form.update(LecturerFormState::reset);
        self.lecturer_messages.update(MessageState::clear);
    }

    /// Refetches the list and selects the new lecturer.
    pub fn lecturer_created(&self, result: Result<Lecturer, ApiError>) {
        match result {
            Ok(lecturer) => {
                self.lecturer_reload.update(|n| *n = n.wrapping_add(1));
                self.form
                    .update(|form| form.lecturer_id = lecturer.id.to_string());
                self.lecturer_form.update(LecturerFormState::reset);
                self.lecturer_messages.update(MessageState::clear);
                self.show_add_lecturer.set(false);
            }
            Err(err) => {
                warn!("failed to add lecturer: {}", err);
                self.lecturer_messages
                    .update(|m| m.set_error(format!("Lỗi khi thêm giảng viên: {}", err.error)));
            }
        }
    }

    pub fn course_created(&self, result: Result<CourseResponse, ApiError>) {
        match result {
            Ok(course) => {
                self.messages
                    .update(|m| m.set_success("Tạo lớp học thành công!"));
                self.on_created.call(course.id);
            }
            Err(err) => {
                warn!("failed to create course: {}", err);
                self.messages
                    .update(|m| m.set_error(format!("Lỗi khi tạo lớp học: {}", err.error)));
            }
        }
    }
}

pub fn use_course_create_view_model() -> CourseCreateViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = CourseCreateRepository::new_with_client(Rc::new(api));
    let on_created = Callback::new(|course_id: i64| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .location()
                .set_href(&format!("/admin/course/{}", course_id));
        }
    });
    let vm = build_course_create_view_model(repository, on_created);

    create_effect(move |_| {
        if let Some(result) = vm.add_lecturer_action.value().get() {
            vm.lecturer_created(result);
        }
    });
    create_effect(move |_| {
        if let Some(result) = vm.create_action.value().get() {
            vm.course_created(result);
        }
    });

    vm
}

pub fn build_course_create_view_model(
    repository: CourseCreateRepository,
    on_created: Callback<i64>,
) -> CourseCreateViewModel {
    let lecturer_reload = create_rw_signal(0u32);

    let repo_for_list = repository.clone();
    let lecturers = create_resource(
        move || lecturer_reload.get(),
        move |_| {
            let repo = repo_for_list.clone();
            async move { repo.fetch_lecturers().await }
        },
    );

    let repo_for_lecturer = repository.clone();
    let add_lecturer_action = create_action(move |request: &CreateLecturerRequest| {
        let repo = repo_for_lecturer.clone();
        let request = request.clone();
        async move { repo.create_lecturer(request).await }
    });

    let repo_for_course = repository;
    let create_action = create_action(move |request: &CreateCourseRequest| {
        let repo = repo_for_course.clone();
        let request = request.clone();
        async move { repo.create_course(request).await }
    });

    CourseCreateViewModel {
        lecturer_reload,
        lecturers,
        form: create_rw_signal(CreateCourseFormState::default()),
        messages: create_rw_signal(MessageState::default()),
        create_action,
        show_add_lecturer: create_rw_signal(false),
        lecturer_form: create_rw_signal(LecturerFormState::default()),
        lecturer_messages: create_rw_signal(MessageState::default()),
        add_lecturer_action,
        on_created,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::course, ssr::with_runtime};
    use chrono_tz::Asia::Ho_Chi_Minh;

    fn offline_view_model(on_created: Callback<i64>) -> CourseCreateViewModel {
        build_course_create_view_model(
            CourseCreateRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
                "http://unused",
            ))),
            on_created,
        )
    }

    fn with_offline_runtime(f: impl FnOnce()) {
        leptos_reactive::suppress_resource_load(true);
        with_runtime(f);
        leptos_reactive::suppress_resource_load(false);
    }

    #[test]
    fn invalid_course_form_is_not_submitted() {
        with_offline_runtime(|| {
            let vm = offline_view_model(Callback::new(|_| {}));
            vm.form.update(|form| {
                form.name = "Công nghệ Web".into();
                form.course_code = "IT4409".into();
            });
            vm.submit_course(Ho_Chi_Minh);
            assert_eq!(
                vm.messages.get().error.as_deref(),
                Some("Vui lòng chọn giảng viên.")
            );
            assert_eq!(vm.create_action.version().get(), 0);
        });
    }

    #[test]
    fn created_lecturer_is_selected_and_form_closed() {
        with_offline_runtime(|| {
            let vm = offline_view_model(Callback::new(|_| {}));
            vm.toggle_add_lecturer();
            assert!(vm.show_add_lecturer.get());
            vm.lecturer_form.update(|form| form.name = "Lê Thị D".into());

            vm.lecturer_created(Ok(Lecturer {
                id: 7,
                name: "Lê Thị D".into(),
            }));

            assert_eq!(vm.form.get().lecturer_id, "7");
            assert!(!vm.show_add_lecturer.get());
            assert_eq!(vm.lecturer_form.get(), LecturerFormState::default());
            assert_eq!(vm.lecturer_reload.get(), 1);
        });
    }

    #[test]
    fn failed_lecturer_keeps_form_open() {
        with_offline_runtime(|| {
            let vm = offline_view_model(Callback::new(|_| {}));
            vm.toggle_add_lecturer();
            vm.lecturer_created(Err(ApiError::from_status(409, "Email đã tồn tại")));
            assert!(vm.show_add_lecturer.get());
            assert_eq!(
                vm.lecturer_messages.get().error.as_deref(),
                Some("Lỗi khi thêm giảng viên: Email đã tồn tại")
            );
        });
    }

    #[test]
    fn created_course_hands_its_id_to_navigation() {
        with_offline_runtime(|| {
            let target = create_rw_signal(None::<i64>);
            let vm = offline_view_model(Callback::new(move |id| target.set(Some(id))));
            vm.course_created(Ok(course(42, "Công nghệ Web", 15)));
            assert_eq!(target.get(), Some(42));
            assert_eq!(
                vm.messages.get().success.as_deref(),
                Some("Tạo lớp học thành công!")
            );

            vm.course_created(Err(ApiError::from_status(500, "Lỗi máy chủ")));
            assert_eq!(
                vm.messages.get().error.as_deref(),
                Some("Lỗi khi tạo lớp học: Lỗi máy chủ")
            );
        });
    }
}
