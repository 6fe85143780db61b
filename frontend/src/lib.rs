mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

pub use router::mount_app;

/// Browser entry point: logging, panic hook, runtime config, then mount.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Logger init failed: {}", err).into());
    }
    log::info!("Starting HRMS Lite frontend");

    // window.__HRMS_ENV (env.js) wins over ./config.json; the app mounts
    // with whatever zone they resolve to.
    leptos::spawn_local(async move {
        let time_zone = config::init().await;
        log::info!("Runtime config initialized");
        mount_app(time_zone);
    });
}
