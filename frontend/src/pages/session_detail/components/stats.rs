use leptos::*;

use crate::pages::session_detail::types::{RosterStats, SessionPhase};

pub fn not_checked_in_title(phase: Option<SessionPhase>) -> &'static str {
    match phase {
        Some(SessionPhase::Upcoming) => "Chưa điểm danh",
        _ => "Vắng mặt",
    }
}

#[component]
fn StatCard(
    title: Signal<&'static str>,
    value: Signal<usize>,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("bg-white shadow rounded-lg p-4 border-l-4 {}", accent)>
            <p class="text-sm text-slate-500">{move || title.get()}</p>
            <p class="text-2xl font-semibold text-slate-900">{move || value.get()}</p>
        </div>
    }
}

#[component]
pub fn StatsCards(
    #[prop(into)] stats: Signal<RosterStats>,
    #[prop(into)] phase: Signal<Option<SessionPhase>>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
            <StatCard
                title=Signal::derive(|| "Sĩ số")
                value=Signal::derive(move || stats.get().total)
                accent="border-indigo-500"
            />
            <StatCard
                title=Signal::derive(|| "Có mặt")
                value=Signal::derive(move || stats.get().present)
                accent="border-green-500"
            />
            <StatCard
                title=Signal::derive(|| "Đi muộn")
                value=Signal::derive(move || stats.get().late)
                accent="border-amber-500"
            />
            <StatCard
                title=Signal::derive(move || not_checked_in_title(phase.get()))
                value=Signal::derive(move || stats.get().not_checked_in)
                accent="border-red-500"
            />
        </div>
    }
}
