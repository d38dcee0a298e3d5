//! Item List Frontend Entry Point

mod app;
mod components;
mod config;
mod form;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Err(e) = console_logger::init(config.level_filter()) {
        web_sys::console::warn_1(&e.to_string().into());
    }
    if let Some(e) = config_error {
        tracing::warn!("{e}, using defaults");
    }

    mount_to_body(App);
}
