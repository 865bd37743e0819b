use leptos::*;
use leptos_meta::Title;
use std::rc::Rc;

use super::repository::CourseListRepository;
use crate::{
    api::{ApiClient, ApiError, CourseResponse},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
};

pub type CoursesResource = Resource<(), Result<Vec<CourseResponse>, ApiError>>;

pub fn session_count_label(course: &CourseResponse) -> String {
    format!("{} buổi học", course.schedules.len())
}

#[component]
pub fn CourseListPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = CourseListRepository::new_with_client(Rc::new(api));
    let courses = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_courses().await }
        },
    );
    view! {
        <Layout>
            <Title text="Quản lý lớp học"/>
            <CourseListContent courses=courses/>
        </Layout>
    }
}

#[component]
fn CourseCard(course: CourseResponse) -> impl IntoView {
    let href = format!("/admin/course/{}", course.id);
    let sessions = session_count_label(&course);
    view! {
        <a href=href class="block bg-white shadow rounded-lg p-5 hover:shadow-md transition">
            <h3 class="text-lg font-semibold text-slate-900">{course.name}</h3>
            <p class="text-sm text-indigo-700">{course.course_code.unwrap_or_default()}</p>
            <p class="mt-2 text-sm text-slate-500">{sessions}</p>
        </a>
    }
}

#[component]
pub fn CourseListContent(courses: CoursesResource) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between mb-6">
            <h1 class="text-2xl font-bold text-slate-900">"Quản lý lớp học"</h1>
            <a
                href="/admin/courses/new"
                class="px-4 py-2 rounded-md bg-indigo-600 text-white text-sm font-medium hover:bg-indigo-700"
            >
                "+ Tạo lớp học mới"
            </a>
        </div>
        {move || match courses.get() {
            None => view! { <LoadingSpinner label="Đang tải..."/> }.into_view(),
            Some(Err(_)) => view! { <ErrorMessage message="Không thể tải danh sách khóa học."/> }.into_view(),
            Some(Ok(list)) if list.is_empty() => view! {
                <EmptyState
                    title="Chưa có lớp học nào"
                    description="Tạo lớp học đầu tiên để bắt đầu điểm danh."
                />
            }
            .into_view(),
            Some(Ok(list)) => view! {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    {list.into_iter().map(|course| view! { <CourseCard course=course/> }).collect_view()}
                </div>
            }
            .into_view(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::course;

    #[test]
    fn session_count_counts_schedules() {
        assert_eq!(session_count_label(&course(1, "Rust", 15)), "15 buổi học");
        assert_eq!(session_count_label(&course(1, "Rust", 0)), "0 buổi học");
    }
}
