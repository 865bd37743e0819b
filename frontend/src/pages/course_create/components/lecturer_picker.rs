use leptos::*;

use crate::{
    api::Lecturer,
    components::layout::{ErrorMessage, FeedbackMessages},
    pages::course_create::view_model::CourseCreateViewModel,
};

const INPUT_CLASS: &str = "mt-1 w-full border border-slate-300 rounded-md px-3 py-2";

/// Lecturer select plus the inline sub-form that adds a new one.
#[component]
pub fn LecturerPicker(vm: CourseCreateViewModel) -> impl IntoView {
    let options = move || match vm.lecturers.get() {
        Some(Ok(list)) => list,
        _ => Vec::new(),
    };
    let load_error = move || matches!(vm.lecturers.get(), Some(Err(_)));

    view! {
        <div class="space-y-2">
            <div class="flex items-end gap-2">
                <label class="flex-1 block text-sm font-medium text-slate-700">
                    "Giảng viên *"
                    <select
                        class=INPUT_CLASS
                        prop:value=move || vm.form.with(|f| f.lecturer_id.clone())
                        on:change=move |ev| vm.form.update(|f| f.lecturer_id = event_target_value(&ev))
                    >
                        <option value="">"-- Chọn giảng viên --"</option>
                        <For
                            each=options
                            key=|lecturer: &Lecturer| lecturer.id
                            children=move |lecturer: Lecturer| {
                                let id = lecturer.id.to_string();
                                let selected = {
                                    let id = id.clone();
                                    move || vm.form.with(|f| f.lecturer_id == id)
                                };
                                view! { <option value=id selected=selected>{lecturer.name}</option> }
                            }
                        />
                    </select>
                </label>
                <button
                    type="button"
                    class="px-3 py-2 rounded-md border border-slate-300 text-sm text-slate-700 hover:bg-slate-100"
                    on:click=move |_| vm.toggle_add_lecturer()
                >
                    {move || if vm.show_add_lecturer.get() { "Hủy" } else { "+ Thêm" }}
                </button>
            </div>
            <Show when=load_error>
                <ErrorMessage message="Không thể tải danh sách giảng viên."/>
            </Show>
            <Show when=move || vm.show_add_lecturer.get()>
                <AddLecturerForm vm=vm/>
            </Show>
        </div>
    }
}

#[component]
fn AddLecturerForm(vm: CourseCreateViewModel) -> impl IntoView {
    let pending = vm.add_lecturer_action.pending();
    view! {
        <div class="rounded-md border border-indigo-100 bg-indigo-50 p-4 space-y-3">
            <label class="block text-sm font-medium text-slate-700">
                "Tên giảng viên"
                <input
                    type="text"
                    class=INPUT_CLASS
                    prop:value=move || vm.lecturer_form.with(|f| f.name.clone())
                    on:input=move |ev| vm.lecturer_form.update(|f| f.name = event_target_value(&ev))
                />
            </label>
            <label class="block text-sm font-medium text-slate-700">
                "Email"
                <input
                    type="email"
                    class=INPUT_CLASS
                    prop:value=move || vm.lecturer_form.with(|f| f.email.clone())
                    on:input=move |ev| vm.lecturer_form.update(|f| f.email = event_target_value(&ev))
                />
            </label>
            <button
                type="button"
                class="px-4 py-2 rounded-md bg-indigo-600 text-white text-sm font-medium disabled:opacity-50"
                disabled=move || pending.get()
                on:click=move |_| vm.submit_lecturer()
            >
                {move || if pending.get() { "Đang thêm..." } else { "Lưu giảng viên" }}
            </button>
            <FeedbackMessages messages=vm.lecturer_messages/>
        </div>
    }
}
