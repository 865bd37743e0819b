use chrono_tz::Tz;
use leptos::*;

use crate::{
    api::ScheduleSimple,
    pages::session_detail::types::SessionPhase,
    utils::time::{format_clock, format_long_date},
};

#[component]
pub fn SessionHeader(
    schedule: ScheduleSimple,
    #[prop(into)] phase: Signal<Option<SessionPhase>>,
    tz: Tz,
    on_reload: Callback<()>,
) -> impl IntoView {
    let date = format_long_date(schedule.start_time, tz);
    let hours = format!(
        "{} - {}",
        format_clock(schedule.start_time, tz),
        format_clock(schedule.end_time, tz)
    );
    let room = schedule.room.clone().filter(|room| !room.is_empty());
    let back_href = schedule
        .course_id
        .map(|id| format!("/admin/course/{}", id))
        .unwrap_or_else(|| "/admin".to_string());

    view! {
        <div class="flex flex-col gap-3 md:flex-row md:items-start md:justify-between mb-6">
            <div class="space-y-1">
                <a href=back_href class="text-sm text-indigo-600 hover:underline">"← Quay lại lớp học"</a>
                <h1 class="text-2xl font-bold text-slate-900">"Chi tiết buổi học"</h1>
                <p class="text-slate-700">{date}" · "{hours}</p>
                {room.map(|room| view! { <p class="text-sm text-slate-500">"Phòng: "{room}</p> })}
                <Show when=move || { phase.get() == Some(SessionPhase::Upcoming) }>
                    <span class="inline-flex items-center px-2 py-0.5 rounded text-xs font-medium bg-slate-100 text-slate-700">
                        "Buổi học chưa bắt đầu"
                    </span>
                </Show>
            </div>
            <button
                type="button"
                class="self-start px-3 py-2 text-sm rounded-md border border-slate-300 hover:bg-slate-100"
                on:click=move |_| on_reload.call(())
            >
                "Tải lại"
            </button>
        </div>
    }
}
