use leptos::*;
use leptos_meta::Title;
use web_sys::HtmlInputElement;

use super::{
    utils::{course_option_label, PHOTO_ACCEPT},
    view_model::{use_check_in_view_model, CheckInViewModel},
};
use crate::{
    api::CourseResponse,
    components::layout::{ErrorMessage, Layout},
    utils::capture::selected_file,
};

const CARD_CLASS: &str = "bg-white shadow rounded-lg p-6 space-y-3";
const INPUT_CLASS: &str = "w-full border border-slate-300 rounded-md px-3 py-2";
const BUTTON_CLASS: &str =
    "w-full px-4 py-2 rounded-md bg-indigo-600 text-white text-sm font-medium disabled:opacity-50";

#[component]
pub fn CheckInPage() -> impl IntoView {
    let vm = use_check_in_view_model();
    view! {
        <Layout>
            <Title text="Điểm danh"/>
            <CheckInContent vm=vm/>
        </Layout>
    }
}

#[component]
pub fn CheckInContent(vm: CheckInViewModel) -> impl IntoView {
    let busy = vm.busy();
    let on_photo = move |ev: ev::Event| {
        let file = event_target::<HtmlInputElement>(&ev);
        vm.photo.set(selected_file(&file));
    };
    let photo_name = move || vm.photo.with(|photo| photo.as_ref().map(|file| file.name()));

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <h1 class="text-2xl font-bold text-slate-900 text-center">"Hệ thống Điểm danh Khuôn mặt"</h1>
            <p role="status" class="text-center text-lg text-slate-700">{move || vm.message.get()}</p>

            <section class=CARD_CLASS>
                <h2 class="text-lg font-semibold text-slate-900">"Ảnh khuôn mặt"</h2>
                <input
                    type="file"
                    accept=PHOTO_ACCEPT
                    capture="user"
                    class="block w-full text-sm text-slate-600"
                    disabled=move || busy.get()
                    on:change=on_photo
                />
                {move || photo_name().map(|name| view! { <p class="text-sm text-slate-500">{name}</p> })}
            </section>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <section class=CARD_CLASS>
                    <h2 class="text-lg font-semibold text-slate-900">"Đăng ký Mới"</h2>
                    <input
                        type="text"
                        class=INPUT_CLASS
                        placeholder="Nhập MSSV"
                        disabled=move || busy.get()
                        prop:value=move || vm.student_id.get()
                        on:input=move |ev| vm.student_id.set(event_target_value(&ev))
                    />
                    <button class=BUTTON_CLASS disabled=move || busy.get() on:click=move |_| vm.enroll()>
                        {move || if busy.get() { "Đang xử lý..." } else { "Đăng ký (Chỉ cần MSSV)" }}
                    </button>
                </section>

                <section class=CARD_CLASS>
                    <h2 class="text-lg font-semibold text-slate-900">"Điểm danh"</h2>
                    <p class="text-sm text-slate-500">"Chọn môn học và bấm nút"</p>
                    <CourseSelect vm=vm/>
                    <button class=BUTTON_CLASS disabled=move || busy.get() on:click=move |_| vm.check_in()>
                        {move || if busy.get() { "Đang gửi..." } else { "Bắt đầu Điểm danh" }}
                    </button>
                </section>
            </div>
        </div>
    }
}

#[component]
fn CourseSelect(vm: CheckInViewModel) -> impl IntoView {
    let busy = vm.busy();
    let on_change = move |ev: ev::Event| {
        vm.selected_course.set(event_target_value(&ev).parse::<i64>().ok());
    };
    move || match vm.courses.get() {
        Some(Err(_)) => view! { <ErrorMessage message="Không tải được danh sách môn học."/> }.into_view(),
        Some(Ok(list)) if !list.is_empty() => {
            let options = list
                .into_iter()
                .map(|course: CourseResponse| {
                    let id = course.id;
                    let label = course_option_label(&course);
                    view! {
                        <option value=id.to_string() selected=move || { vm.course_id.get() == Some(id) }>
                            {label}
                        </option>
                    }
                })
                .collect_view();
            view! {
                <select class=INPUT_CLASS disabled=move || busy.get() on:change=on_change>
                    {options}
                </select>
            }
            .into_view()
        }
        _ => view! {
            <select class=INPUT_CLASS disabled=true>
                <option value="">"Đang tải danh sách..."</option>
            </select>
        }
        .into_view(),
    }
}
