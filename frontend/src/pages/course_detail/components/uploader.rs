use leptos::*;

use crate::{
    components::layout::FeedbackMessages,
    pages::course_detail::{utils::UPLOAD_ACCEPT, view_model::CourseDetailViewModel},
    utils::capture::selected_file,
};

#[component]
pub fn EnrollmentUploader(vm: CourseDetailViewModel) -> impl IntoView {
    let pending = vm.upload_action.pending();
    let file_label = move || {
        vm.upload_file
            .with(|file| file.as_ref().map(|f| f.name()))
            .unwrap_or_else(|| "Chọn file CSV hoặc Excel".to_string())
    };
    let on_change = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        vm.upload_file.set(selected_file(&input));
    };
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        vm.submit_upload();
    };

    view! {
        <section class="bg-white shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-lg font-semibold text-slate-900">"Ghi danh hàng loạt"</h2>
                <p class="text-sm text-slate-500">
                    "Upload file CSV/Excel để ghi danh nhiều sinh viên cùng lúc"
                </p>
            </div>
            <form class="space-y-3" on:submit=on_submit>
                <label class="block border-2 border-dashed border-slate-300 rounded-md px-4 py-3 cursor-pointer">
                    <input type="file" class="sr-only" accept=UPLOAD_ACCEPT on:change=on_change/>
                    <span class="text-sm text-slate-700">{file_label}</span>
                </label>
                <button
                    type="submit"
                    class="w-full px-4 py-2 rounded-md bg-indigo-600 text-white text-sm font-medium disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Đang xử lý..." } else { "Bắt đầu ghi danh" }}
                </button>
            </form>
            <FeedbackMessages messages=vm.upload_messages/>
        </section>
    }
}
