//! Lablr Frontend Entry Point

mod models;
mod config;
mod api;
mod identity;
mod notice;
mod feed;
mod publish;
mod format;
mod context;
mod store;
mod logging;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    let config = AppConfig::from_env();
    let logger = logging::init(config.log_level);
    logging::install_panic_hook(logger);
    log::info!("[APP] starting");

    mount_to_body(move || view! { <App config=config /> });
}
