use crate::api::ApiError;
use leptos::*;

fn validation_messages(error: &ApiError) -> Vec<String> {
    if error.code != "VALIDATION_ERROR" {
        return Vec::new();
    }
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|err| err.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Renders an `ApiError` inline: the message, any validation messages and
/// the error code when it carries one.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div role="alert" class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2">
                <div class="font-semibold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error.get().map(|e| {
                        let messages = validation_messages(&e);
                        if !messages.is_empty() {
                            view! {
                                <ul class="list-disc list-inside text-sm">
                                    {messages.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                                </ul>
                            }
                            .into_view()
                        } else if e.code != "UNKNOWN" && !e.code.is_empty() {
                            view! { <div class="text-xs opacity-75">{"Mã lỗi: "}{e.code}</div> }.into_view()
                        } else {
                            ().into_view()
                        }
                    })
                }}
            </div>
        </Show>
    }
}
