use leptos::*;

/// Dashed placeholder for lists with nothing to show.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] action: Option<View>,
) -> impl IntoView {
    view! {
        <div class="text-center py-10 px-4 rounded-lg border-2 border-dashed border-slate-300 bg-slate-50">
            <h3 class="text-sm font-semibold text-slate-800">{title}</h3>
            {description.map(|desc| view! { <p class="mt-1 text-sm text-slate-500">{desc}</p> })}
            {action.map(|action| view! { <div class="mt-4">{action}</div> })}
        </div>
    }
}
