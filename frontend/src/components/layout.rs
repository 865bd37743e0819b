use leptos::*;

use crate::utils::MessageState;

const NAV_LINKS: &[(&str, &str)] = &[("/", "Điểm danh"), ("/admin", "Quản lý lớp học")];

const NAV_LINK_CLASS: &str =
    "text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-slate-100";

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm border-b border-slate-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-slate-900">"Rollcall"</a>
                    <nav class="flex space-x-2">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| view! {
                                <a href=*href class=NAV_LINK_CLASS>{*label}</a>
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center gap-2 p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600"></div>
            {label.map(|text| view! { <p class="text-sm text-slate-500">{text}</p> })}
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="alert" class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="status" class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Renders whichever side of a `MessageState` is set.
#[component]
pub fn FeedbackMessages(#[prop(into)] messages: Signal<MessageState>) -> impl IntoView {
    move || {
        let state = messages.get();
        match (state.success, state.error) {
            (_, Some(error)) => view! { <ErrorMessage message=error/> }.into_view(),
            (Some(success), None) => view! { <SuccessMessage message=success/> }.into_view(),
            (None, None) => ().into_view(),
        }
    }
}
