use leptos::*;
use leptos_meta::Title;

use super::{
    components::{
        filters::RosterFilters, header::SessionHeader, roster_table::RosterTable,
        stats::StatsCards,
    },
    view_model::{use_session_detail_view_model, SessionDetailViewModel},
};
use crate::{
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::time::app_time_zone,
};

#[component]
pub fn SessionDetailPage() -> impl IntoView {
    let vm = use_session_detail_view_model();
    view! {
        <Layout>
            <Title text="Chi tiết buổi học"/>
            <SessionDetailContent vm=vm/>
        </Layout>
    }
}

#[component]
pub fn SessionDetailContent(vm: SessionDetailViewModel) -> impl IntoView {
    let on_reload = Callback::new(move |_| vm.trigger_reload());

    move || match vm.session_resource.get() {
        None => view! { <LoadingSpinner label="Đang tải dữ liệu buổi học..."/> }.into_view(),
        Some(Err(err)) if err.code == "NOT_FOUND" || err.code == "VALIDATION_ERROR" => view! {
            <EmptyState
                title="Không có dữ liệu buổi học"
                description=err.error
                action=view! { <a href="/admin" class="text-indigo-600 hover:underline">"Về danh sách lớp"</a> }.into_view()
            />
        }
        .into_view(),
        Some(Err(err)) => view! {
            <div class="space-y-3">
                <ErrorMessage message=format!("Không tải được buổi học: {}", err.error)/>
                <button
                    type="button"
                    class="px-3 py-2 text-sm rounded-md bg-indigo-600 text-white hover:bg-indigo-700"
                    on:click=move |_| on_reload.call(())
                >
                    "Thử lại"
                </button>
            </div>
        }
        .into_view(),
        Some(Ok(detail)) => {
            let tz = app_time_zone();
            view! {
                <SessionHeader schedule=detail.schedule phase=vm.phase tz=tz on_reload=on_reload/>
                <StatsCards stats=vm.stats phase=vm.phase/>
                <RosterFilters facet=vm.facet query=vm.query phase=vm.phase/>
                <RosterTable rows=vm.rows tz=tz/>
            }
            .into_view()
        }
    }
}
