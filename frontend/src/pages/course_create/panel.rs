use leptos::*;
use leptos_meta::Title;

use super::{
    components::lecturer_picker::LecturerPicker,
    utils::{MAX_SESSIONS, MIN_SESSIONS},
    view_model::{use_course_create_view_model, CourseCreateViewModel},
};
use crate::{
    components::layout::{FeedbackMessages, Layout},
    utils::time::app_time_zone,
};

const INPUT_CLASS: &str = "mt-1 w-full border border-slate-300 rounded-md px-3 py-2";
const LABEL_CLASS: &str = "block text-sm font-medium text-slate-700";

#[component]
pub fn CourseCreatePage() -> impl IntoView {
    let vm = use_course_create_view_model();
    view! {
        <Layout>
            <Title text="Tạo lớp học mới"/>
            <CourseCreateForm vm=vm/>
        </Layout>
    }
}

#[component]
pub fn CourseCreateForm(vm: CourseCreateViewModel) -> impl IntoView {
    let pending = vm.create_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_course(app_time_zone());
    };

    view! {
        <div class="max-w-2xl mx-auto bg-white shadow rounded-lg p-6 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-slate-900">"Tạo lớp học mới"</h1>
                <a href="/admin" class="text-sm text-indigo-600 hover:underline">"Quay lại"</a>
            </div>
            <form class="space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <label class=LABEL_CLASS>
                        "Tên lớp học *"
                        <input
                            type="text"
                            class=INPUT_CLASS
                            prop:value=move || vm.form.with(|f| f.name.clone())
                            on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class=LABEL_CLASS>
                        "Mã lớp học *"
                        <input
                            type="text"
                            class=INPUT_CLASS
                            prop:value=move || vm.form.with(|f| f.course_code.clone())
                            on:input=move |ev| vm.form.update(|f| f.course_code = event_target_value(&ev))
                        />
                    </label>
                </div>
                <LecturerPicker vm=vm/>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <label class=LABEL_CLASS>
                        "Bắt đầu buổi đầu tiên *"
                        <input
                            type="datetime-local"
                            class=INPUT_CLASS
                            prop:value=move || vm.form.with(|f| f.start.clone())
                            on:input=move |ev| vm.form.update(|f| f.start = event_target_value(&ev))
                        />
                    </label>
                    <label class=LABEL_CLASS>
                        "Kết thúc buổi đầu tiên *"
                        <input
                            type="datetime-local"
                            class=INPUT_CLASS
                            prop:value=move || vm.form.with(|f| f.end.clone())
                            on:input=move |ev| vm.form.update(|f| f.end = event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <label class=LABEL_CLASS>
                        "Số buổi học *"
                        <input
                            type="number"
                            min=MIN_SESSIONS
                            max=MAX_SESSIONS
                            class=INPUT_CLASS
                            prop:value=move || vm.form.with(|f| f.number_of_sessions.clone())
                            on:input=move |ev| {
                                vm.form.update(|f| f.number_of_sessions = event_target_value(&ev))
                            }
                        />
                    </label>
                    <label class=LABEL_CLASS>
                        "Phòng học"
                        <input
                            type="text"
                            class=INPUT_CLASS
                            placeholder="D9-301"
                            prop:value=move || vm.form.with(|f| f.room.clone())
                            on:input=move |ev| vm.form.update(|f| f.room = event_target_value(&ev))
                        />
                    </label>
                </div>
                <FeedbackMessages messages=vm.messages/>
                <button
                    type="submit"
                    class="w-full px-4 py-2 rounded-md bg-indigo-600 text-white text-sm font-medium disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Đang tạo..." } else { "Tạo Lớp" }}
                </button>
            </form>
        </div>
    }
}
