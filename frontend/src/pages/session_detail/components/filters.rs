use leptos::*;

use crate::pages::session_detail::types::{SessionPhase, StatusFacet};

const ACTIVE: &str = "px-3 py-1.5 rounded-full text-sm font-medium bg-indigo-600 text-white";
const IDLE: &str =
    "px-3 py-1.5 rounded-full text-sm font-medium bg-white text-slate-700 border border-slate-300 hover:bg-slate-100";

#[component]
pub fn RosterFilters(
    facet: RwSignal<StatusFacet>,
    query: RwSignal<String>,
    #[prop(into)] phase: Signal<Option<SessionPhase>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-3 md:flex-row md:items-center md:justify-between mb-4">
            <input
                type="search"
                class="w-full md:w-80 border border-slate-300 rounded-md px-3 py-2 text-sm"
                placeholder="Tìm theo tên hoặc mã sinh viên"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <div class="flex flex-wrap gap-2" role="group">
                {StatusFacet::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                type="button"
                                class=move || if facet.get() == option { ACTIVE } else { IDLE }
                                aria-pressed=move || (facet.get() == option).to_string()
                                on:click=move |_| facet.set(option)
                            >
                                {move || option.label(phase.get())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
