use leptos::*;

use crate::{
    components::layout::FeedbackMessages, pages::course_detail::view_model::CourseDetailViewModel,
};

#[component]
pub fn AddStudentForm(vm: CourseDetailViewModel) -> impl IntoView {
    let pending = vm.add_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        vm.submit_add_student();
    };

    view! {
        <section class="bg-white shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-lg font-semibold text-slate-900">"Thêm sinh viên"</h2>
                <p class="text-sm text-slate-500">"Ghi danh sinh viên thủ công vào lớp học"</p>
            </div>
            <form class="space-y-3" on:submit=on_submit>
                <label class="block text-sm font-medium text-slate-700">
                    "Họ và tên *"
                    <input
                        type="text"
                        class="mt-1 w-full border border-slate-300 rounded-md px-3 py-2"
                        placeholder="Nguyễn Văn A"
                        prop:value=move || vm.add_form.with(|f| f.name.clone())
                        on:input=move |ev| vm.add_form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm font-medium text-slate-700">
                    "Mã sinh viên *"
                    <input
                        type="text"
                        class="mt-1 w-full border border-slate-300 rounded-md px-3 py-2"
                        placeholder="SV001"
                        prop:value=move || vm.add_form.with(|f| f.student_id.clone())
                        on:input=move |ev| vm.add_form.update(|f| f.student_id = event_target_value(&ev))
                    />
                </label>
                <button
                    type="submit"
                    class="w-full px-4 py-2 rounded-md bg-emerald-600 text-white text-sm font-medium disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Đang thêm..." } else { "Thêm sinh viên" }}
                </button>
            </form>
            <FeedbackMessages messages=vm.add_messages/>
        </section>
    }
}
