use leptos::*;

use crate::api::ApiClient;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders a view on the host. Resources stay unloaded, so pages render
/// their loading branch unless the test seeds data itself.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| {
        leptos_meta::provide_meta_context();
        view().into_view().render_to_string().to_string()
    });
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Like [`render_to_string`] with an `ApiClient` pointed at `base_url` in
/// context.
pub fn render_with_client<F, N>(base_url: &str, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let client = ApiClient::new_with_base_url(base_url);
    render_to_string(move || {
        provide_context(client);
        view()
    })
}
