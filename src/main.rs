//! Browser entry point: set up logging and mount the app.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("logger was already initialized");
    }
    log::info!("songforge starting");
    leptos::mount::mount_to_body(songforge::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {}
