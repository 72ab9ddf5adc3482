//! Pain Marker Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod export;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("[APP] Console logger unavailable: {}", e).into());
    }

    let config = config::load_page_config();
    log::set_max_level(config.log_level.to_level_filter());
    log::debug!("[APP] Log level {:?}", config.log_level.to_level());

    mount_to_body(move || view! { <App config=config /> });
}
