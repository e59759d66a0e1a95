//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpListingApi;
use crate::config::AppConfig;

/// App-wide configuration provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// API client for the configured base URL
    pub fn api(&self) -> HttpListingApi {
        self.config.with_value(HttpListingApi::from_config)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
