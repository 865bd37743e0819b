use chrono_tz::Tz;
use leptos::*;

use crate::{
    api::ScheduleSimple,
    components::empty_state::EmptyState,
    utils::time::{format_clock, format_long_date},
};

#[component]
pub fn SessionList(schedules: Vec<ScheduleSimple>, tz: Tz) -> impl IntoView {
    let count = schedules.len();
    let items = schedules
        .into_iter()
        .map(|schedule| {
            let href = format!("/admin/session/{}", schedule.id);
            let when = format!(
                "{} - {}",
                format_clock(schedule.start_time, tz),
                format_long_date(schedule.start_time, tz)
            );
            let room = schedule.room.unwrap_or_default();
            view! {
                <li>
                    <a href=href class="flex items-center justify-between px-4 py-3 rounded-md hover:bg-slate-50">
                        <div>
                            <p class="text-sm font-medium text-slate-900">{when}</p>
                            <p class="text-xs text-slate-500">"Phòng: "{room}</p>
                        </div>
                        <span class="text-slate-400">"→"</span>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="bg-white shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold text-slate-900">"Các buổi học của lớp"</h2>
                <span class="text-sm text-slate-500">{count}" buổi"</span>
            </div>
            {if count == 0 {
                view! { <EmptyState title="Chưa có buổi học nào được lên lịch."/> }.into_view()
            } else {
                view! { <ul class="divide-y divide-slate-100">{items}</ul> }.into_view()
            }}
        </section>
    }
}
