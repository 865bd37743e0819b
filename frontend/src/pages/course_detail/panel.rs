use leptos::*;
use leptos_meta::Title;

use super::{
    components::{
        add_student::AddStudentForm, sessions::SessionList, student_list::StudentList,
        uploader::EnrollmentUploader,
    },
    view_model::{use_course_detail_view_model, CourseDetailViewModel},
};
use crate::{
    api::CourseResponse,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::time::app_time_zone,
};

#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let vm = use_course_detail_view_model();
    view! {
        <Layout>
            <Title text="Chi tiết lớp học"/>
            <CourseDetailContent vm=vm/>
        </Layout>
    }
}

#[component]
fn CourseHeading(course: CourseResponse) -> impl IntoView {
    let lecturer = course.lecturer_name().map(str::to_string);
    view! {
        <div class="mb-6 space-y-1">
            <a href="/admin" class="text-sm text-indigo-600 hover:underline">"← Quay lại danh sách lớp"</a>
            <div class="flex items-center gap-3">
                <h1 class="text-2xl font-bold text-slate-900">{course.name}</h1>
                {course.course_code.map(|code| view! {
                    <span class="px-2 py-0.5 rounded bg-indigo-50 text-indigo-700 text-sm font-medium">{code}</span>
                })}
            </div>
            {lecturer.map(|name| view! { <p class="text-sm text-slate-500">"Giảng viên: "{name}</p> })}
        </div>
    }
}

#[component]
pub fn CourseDetailContent(vm: CourseDetailViewModel) -> impl IntoView {
    let course = move || vm.course_resource.get();
    view! {
        {move || match course() {
            None => view! { <LoadingSpinner label="Đang tải chi tiết lớp học..."/> }.into_view(),
            Some(Err(err)) if err.code == "NOT_FOUND" || err.code == "VALIDATION_ERROR" => view! {
                <EmptyState
                    title="Không tìm thấy lớp học."
                    action=view! { <a href="/admin" class="text-indigo-600 hover:underline">"Về danh sách lớp"</a> }.into_view()
                />
            }
            .into_view(),
            Some(Err(err)) => view! { <ErrorMessage message=err.error/> }.into_view(),
            Some(Ok(course)) => {
                let schedules = course.schedules.clone();
                view! {
                    <CourseHeading course=course/>
                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                        <div class="space-y-6">
                            <EnrollmentUploader vm=vm/>
                            <AddStudentForm vm=vm/>
                        </div>
                        <div class="lg:col-span-2 space-y-6">
                            <StudentList search=vm.search/>
                            <SessionList schedules=schedules tz=app_time_zone()/>
                        </div>
                    </div>
                }
                .into_view()
            }
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, ApiError};
    use crate::pages::course_detail::{
        repository::CourseDetailRepository, view_model::build_course_detail_view_model,
    };
    use crate::test_support::{helpers::course, ssr::render_to_string};
    use std::rc::Rc;

    fn offline_view_model() -> CourseDetailViewModel {
        build_course_detail_view_model(
            Signal::derive(|| Some(3)),
            CourseDetailRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
                "http://unused",
            ))),
        )
    }

    #[test]
    fn shows_loading_first() {
        let html = render_to_string(move || {
            let vm = offline_view_model();
            view! { <CourseDetailContent vm=vm/> }
        });
        assert!(html.contains("Đang tải chi tiết lớp học..."));
    }

    #[test]
    fn renders_course_forms_and_sessions() {
        let html = render_to_string(move || {
            let vm = offline_view_model();
            vm.course_resource.set(Ok(course(3, "Nhập môn Rust", 2)));
            view! { <CourseDetailContent vm=vm/> }
        });
        assert!(html.contains("Nhập môn Rust"));
        assert!(html.contains("INT0003"));
        assert!(html.contains("Ghi danh hàng loạt"));
        assert!(html.contains("Thêm sinh viên"));
        assert!(html.contains("Danh sách sinh viên"));
        assert!(html.contains("/admin/session/100"));
        assert!(html.contains("/admin/session/101"));
    }

    #[test]
    fn missing_course_shows_not_found() {
        let html = render_to_string(move || {
            let vm = offline_view_model();
            vm.course_resource
                .set(Err(ApiError::from_status(404, "Course not found")));
            view! { <CourseDetailContent vm=vm/> }
        });
        assert!(html.contains("Không tìm thấy lớp học."));
    }
}
