use leptos::*;

use crate::{
    api::EnrolledStudent,
    components::{
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::LoadingSpinner,
    },
    pages::{
        course_detail::{
            utils::{classify_rate, format_rate, progress_fraction, progress_width, student_initial},
            view_model::StudentSearch,
        },
        session_detail::utils::display_or_placeholder,
    },
};

#[component]
pub fn StudentRow(student: EnrolledStudent) -> impl IntoView {
    let tier = classify_rate(student.attendance_rate);
    let initial = student_initial(student.student_name.as_deref());
    let fraction = progress_fraction(&student);
    view! {
        <li class="flex flex-col gap-2 py-3 md:flex-row md:items-center md:justify-between">
            <div class="flex items-center gap-3">
                <span class="h-8 w-8 rounded-full bg-indigo-100 text-indigo-700 flex items-center justify-center text-sm font-semibold">
                    {initial}
                </span>
                <div>
                    <p class="text-sm font-medium text-slate-900">{display_or_placeholder(student.student_name.as_deref())}</p>
                    <p class="text-xs text-slate-500">{display_or_placeholder(student.student_id.as_deref())}</p>
                </div>
            </div>
            <div class="md:w-64 space-y-1">
                <div class="flex justify-between text-xs">
                    <span class="text-slate-500">"Tiến độ: "{fraction}</span>
                    <span class=tier.text_class()>{format_rate(student.attendance_rate)}</span>
                </div>
                <div class="h-2 rounded-full bg-slate-200">
                    <div class=format!("h-2 rounded-full {}", tier.bar_class()) style=progress_width(student.attendance_rate)></div>
                </div>
            </div>
        </li>
    }
}

#[component]
pub fn StudentList(search: StudentSearch) -> impl IntoView {
    let count = move || search.students.with(Vec::len);
    view! {
        <section class="bg-white shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold text-slate-900">"Danh sách sinh viên"</h2>
                <span class="text-sm text-slate-500">{count}" sinh viên"</span>
            </div>
            <input
                type="search"
                class="w-full border border-slate-300 rounded-md px-3 py-2 text-sm"
                placeholder="Tìm theo tên hoặc MSSV..."
                prop:value=move || search.input.get()
                on:input=move |ev| search.input.set(event_target_value(&ev))
            />
            <InlineErrorMessage error=search.error/>
            <Show
                when=move || !search.loading.get()
                fallback=|| view! { <LoadingSpinner/> }
            >
                <Show
                    when=move || { count() > 0 }
                    fallback=|| view! { <EmptyState title="Lớp học này chưa có sinh viên nào."/> }
                >
                    <ul class="divide-y divide-slate-200">
                        <For
                            each=move || search.students.get()
                            key=|student| student.enrollment_id
                            children=move |student| view! { <StudentRow student=student/> }
                        />
                    </ul>
                </Show>
            </Show>
        </section>
    }
}
