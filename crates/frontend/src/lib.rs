//! O&P Ingeniería site: a client-side rendered Leptos app mounted on `<body>`.

pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Console verbosity: everything in debug builds, warnings and up in release.
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log_level());
    console_error_panic_hook::set_once();
    log::debug!("mounting site v{}", env!("CARGO_PKG_VERSION"));

    leptos::mount::mount_to_body(app::App);
}
