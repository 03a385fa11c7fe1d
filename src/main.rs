//! Todo List Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod logger;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::load();
    logger::init(config.log_level);
    log::info!("[MAIN] Backend at {}, {} todos per page", config.api_base_url, config.page_size);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
