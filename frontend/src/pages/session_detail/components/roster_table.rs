use chrono_tz::Tz;
use leptos::*;

use crate::pages::session_detail::{
    types::RosterRow,
    utils::{display_or_placeholder, format_check_in_time, initials},
};

const HEADERS: [&str; 5] = ["STT", "Sinh viên", "Mã sinh viên", "Giờ điểm danh", "Trạng thái"];

#[component]
fn RosterTableRow(row: RosterRow, tz: Tz) -> impl IntoView {
    let avatar = initials(row.name.as_deref());
    let name = display_or_placeholder(row.name.as_deref());
    let student_id = display_or_placeholder(row.student_id.as_deref());
    let check_in = format_check_in_time(row.check_in_time, tz);
    view! {
        <tr class="hover:bg-slate-50">
            <td class="px-4 py-3 text-sm text-slate-500">{row.ordinal}</td>
            <td class="px-4 py-3">
                <div class="flex items-center gap-3">
                    <span class="h-9 w-9 rounded-full bg-indigo-100 text-indigo-700 flex items-center justify-center text-sm font-semibold">
                        {avatar}
                    </span>
                    <span class="text-sm font-medium text-slate-900">{name}</span>
                </div>
            </td>
            <td class="px-4 py-3 text-sm text-slate-700">{student_id}</td>
            <td class="px-4 py-3 text-sm text-slate-700">{check_in}</td>
            <td class="px-4 py-3">
                <span class=format!("px-2 py-0.5 rounded-full text-xs font-medium {}", row.status.badge_class())>
                    {row.status.label()}
                </span>
            </td>
        </tr>
    }
}

#[component]
pub fn RosterTable(#[prop(into)] rows: Signal<Vec<RosterRow>>, tz: Tz) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg overflow-x-auto">
            <table class="min-w-full divide-y divide-slate-200">
                <thead class="bg-slate-50">
                    <tr>
                        {HEADERS
                            .iter()
                            .map(|title| view! {
                                <th class="px-4 py-3 text-left text-xs font-medium text-slate-500 uppercase tracking-wider">
                                    {*title}
                                </th>
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-slate-200">
                    <Show
                        when=move || rows.with(|rows| !rows.is_empty())
                        fallback=|| view! {
                            <tr>
                                <td colspan="5" class="px-4 py-8 text-center text-sm text-slate-500">
                                    "Không có sinh viên nào"
                                </td>
                            </tr>
                        }
                    >
                        <For
                            each=move || rows.get()
                            key=|row| (row.ordinal, row.key(), row.status)
                            children=move |row: RosterRow| view! { <RosterTableRow row=row tz=tz /> }
                        />
                    </Show>
                </tbody>
            </table>
        </div>
    }
}
