use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{empty_state::EmptyState, layout::Layout},
    pages::{
        checkin::CheckInPage, course_create::CourseCreatePage, course_detail::CourseDetailPage,
        course_list::CourseListPage, session_detail::SessionDetailPage,
    },
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/admin",
    "/admin/courses/new",
    "/admin/course/:course_id",
    "/admin/session/:session_id",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=CheckInPage/>
                <Route path="/admin" view=CourseListPage/>
                <Route path="/admin/courses/new" view=CourseCreatePage/>
                <Route path="/admin/course/:course_id" view=CourseDetailPage/>
                <Route path="/admin/session/:session_id" view=SessionDetailPage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <EmptyState
                title="Không tìm thấy trang"
                action=view! { <a href="/" class="text-indigo-600 hover:underline">"Về trang điểm danh"</a> }.into_view()
            />
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn management_routes_live_under_admin() {
        let admin: Vec<_> = ROUTE_PATHS
            .iter()
            .filter(|path| path.starts_with("/admin"))
            .collect();
        assert_eq!(admin.len(), ROUTE_PATHS.len() - 1);
        assert_eq!(ROUTE_PATHS[0], "/");
    }

    #[test]
    fn detail_routes_take_an_id_param() {
        assert!(ROUTE_PATHS.contains(&"/admin/course/:course_id"));
        assert!(ROUTE_PATHS.contains(&"/admin/session/:session_id"));
    }
}
