#![allow(warnings)]
//! Listing Board Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod logging;
mod models;
mod navigation;
mod pages;
#[cfg(test)]
mod test_support;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);

    let config = AppConfig::from_document();
    log::set_max_level(config.log_level());
    log::info!("[APP] Listings API at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
