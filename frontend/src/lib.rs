//! Browser entry for the DPM Properties landing page.
//!
//! Trunk builds this crate to WASM; on load it routes `log` output to the
//! browser console and mounts the app into `<body>`.

const LOG_LEVEL: log::Level = log::Level::Debug;

/// Starts the page: console logging, readable panics, then the mount.
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    // A logger may already be installed on hot reload.
    _ = console_log::init_with_level(LOG_LEVEL);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::component);
}
