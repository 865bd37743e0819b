use leptos::*;
use leptos_router::use_params_map;
use log::debug;
use std::rc::Rc;

use super::{
    repository::CourseDetailRepository,
    utils::{AddStudentFormState, EnrollmentUpload},
};
use crate::{
    api::{
        AddStudentRequest, AddStudentResponse, ApiClient, ApiError, CourseResponse,
        EnrolledStudent, UploadEnrollmentResponse,
    },
    config,
    utils::{capture::read_file_bytes, Debouncer, FormError, MessageState, RequestSequence},
};

pub type CourseResource = Resource<(Option<i64>, u32), Result<CourseResponse, ApiError>>;

/// State of the debounced student search. Responses are applied only when
/// their ticket is still the latest one issued.
#[derive(Clone, Copy)]
pub struct StudentSearch {
    pub input: RwSignal<String>,
    pub students: RwSignal<Vec<EnrolledStudent>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    sequence: StoredValue<RequestSequence>,
}

impl StudentSearch {
    pub fn new() -> Self {
        Self {
            input: create_rw_signal(String::new()),
            students: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            sequence: store_value(RequestSequence::new()),
        }
    }

    pub fn begin(&self) -> u64 {
        self.loading.set(true);
        self.sequence.with_value(RequestSequence::issue)
    }

    /// Returns whether the result was applied.
    pub fn apply(&self, ticket: u64, result: Result<Vec<EnrolledStudent>, ApiError>) -> bool {
        let current = self
            .sequence
            .try_with_value(|seq| seq.is_current(ticket))
            .unwrap_or(false);
        if !current {
            debug!("discarding stale student search response #{}", ticket);
            return false;
        }
        self.loading.set(false);
        match result {
            Ok(students) => {
                self.students.set(students);
                self.error.set(None);
            }
            Err(err) => self.error.set(Some(err)),
        }
        true
    }
}

impl Default for StudentSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct CourseDetailViewModel {
    pub course_id: Signal<Option<i64>>,
    pub refresh: RwSignal<u32>,
    pub course_resource: CourseResource,
    pub search: StudentSearch,
    pub add_form: RwSignal<AddStudentFormState>,
    pub add_messages: RwSignal<MessageState>,
    pub add_action: Action<(i64, AddStudentRequest), Result<AddStudentResponse, ApiError>>,
    pub upload_file: RwSignal<Option<web_sys::File>>,
    pub upload_messages: RwSignal<MessageState>,
    pub upload_action: Action<(i64, web_sys::File), Result<UploadEnrollmentResponse, ApiError>>,
}

impl CourseDetailViewModel {
    pub fn bump_refresh(&self) {
        self.refresh.update(|value| *value = value.wrapping_add(1));
    }

    pub fn submit_add_student(&self) {
        let Some(course_id) = self.course_id.get_untracked() else {
            return;
        };
        match self.add_form.with_untracked(AddStudentFormState::to_request) {
            Ok(request) => {
                self.add_messages.update(MessageState::clear);
                self.add_action.dispatch((course_id, request));
            }
            Err(err) => self.add_messages.update(|m| m.set_error(err.to_string())),
        }
    }

    pub fn submit_upload(&self) {
        let Some(course_id) = self.course_id.get_untracked() else {
            return;
        };
        match self.upload_file.get_untracked() {
            Some(file) => {
                self.upload_messages.update(MessageState::clear);
                self.upload_action.dispatch((course_id, file));
            }
            None => self
                .upload_messages
                .update(|m| m.set_error(FormError::MissingFile.to_string())),
        }
    }
}

pub fn parse_course_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
}

pub fn use_course_detail_view_model() -> CourseDetailViewModel {
    let params = use_params_map();
    let course_id = Signal::derive(move || {
        params.with(|map| parse_course_id(map.get("course_id").map(String::as_str)))
    });
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = CourseDetailRepository::new_with_client(Rc::new(api));
    let vm = build_course_detail_view_model(course_id, repository.clone());

    let debouncer = Debouncer::new();
    {
        let debouncer = debouncer.clone();
        create_effect(move |_| {
            let course_id = vm.course_id.get();
            vm.refresh.track();
            let query = vm.search.input.get();
            let Some(course_id) = course_id else {
                return;
            };
            let repo = repository.clone();
            let search = vm.search;
            debouncer.schedule(config::search_debounce_ms(), move || {
                let ticket = search.begin();
                spawn_local(async move {
                    let result = repo.search_students(course_id, &query).await;
                    search.apply(ticket, result);
                });
            });
        });
    }
    on_cleanup(move || debouncer.cancel());

    vm
}

pub fn build_course_detail_view_model(
    course_id: Signal<Option<i64>>,
    repository: CourseDetailRepository,
) -> CourseDetailViewModel {
    let refresh = create_rw_signal(0u32);

    let repo_for_course = repository.clone();
    let course_resource = create_resource(
        move || (course_id.get(), refresh.get()),
        move |(id, _refresh)| {
            let repo = repo_for_course.clone();
            async move {
                match id {
                    Some(id) => repo.fetch_course(id).await,
                    None => Err(ApiError::validation("Mã lớp học không hợp lệ")),
                }
            }
        },
    );

    let repo_for_add = repository.clone();
    let add_action = create_action(move |(course_id, request): &(i64, AddStudentRequest)| {
        let repo = repo_for_add.clone();
        let course_id = *course_id;
        let request = request.clone();
        async move { repo.add_student(course_id, request).await }
    });

    let repo_for_upload = repository;
    let upload_action = create_action(move |(course_id, file): &(i64, web_sys::File)| {
        let repo = repo_for_upload.clone();
        let course_id = *course_id;
        let file = file.clone();
        async move {
            let contents = read_file_bytes(&file)
                .await
                .map_err(ApiError::validation)?;
            let upload = EnrollmentUpload {
                file_name: file.name(),
                contents,
            };
            repo.upload_roster(course_id, upload).await
        }
    });

    let vm = CourseDetailViewModel {
        course_id,
        refresh,
        course_resource,
        search: StudentSearch::new(),
        add_form: create_rw_signal(AddStudentFormState::default()),
        add_messages: create_rw_signal(MessageState::default()),
        add_action,
        upload_file: create_rw_signal(None),
        upload_messages: create_rw_signal(MessageState::default()),
        upload_action,
    };

    create_effect(move |_| {
        if let Some(result) = vm.add_action.value().get() {
            match result {
                Ok(_) => {
                    vm.add_messages
                        .update(|m| m.set_success("Thêm sinh viên thành công!"));
                    vm.add_form.update(AddStudentFormState::reset);
                    vm.bump_refresh();
                }
                Err(err) => vm.add_messages.update(|m| m.set_error(err.error)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = vm.upload_action.value().get() {
            match result {
                Ok(response) => {
                    vm.upload_messages.update(|m| m.set_success(response.message));
                    vm.upload_file.set(None);
                    vm.bump_refresh();
                }
                Err(err) => vm.upload_messages.update(|m| m.set_error(err.error)),
            }
        }
    });

    vm
}
