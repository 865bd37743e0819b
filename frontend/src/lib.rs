mod api;
mod components;
pub mod config;
mod pages;
mod router;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("starting rollcall frontend");

    // Requests wait for the runtime config, so mounting does not block on it.
    leptos::spawn_local(async {
        config::init().await;
        log::info!("runtime config initialized");
    });

    router::mount_app();
}
