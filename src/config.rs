//! Application Configuration
//!
//! Deployment defaults, overridable at build time and from the page.

use log::LevelFilter;
use serde::Deserialize;

/// API root used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Image pre-filled into new listings
pub const DEFAULT_IMAGE_URL: &str =
    "https://mysleepyhead.com/media/catalog/product/4/t/4thaug_2ndhalf5934_green.jpg";

/// Categories created on first run when the API has none
pub const BOOTSTRAP_CATEGORIES: [&str; 3] = ["Транспорт", "Мебель", "Техника"];

/// DOM id of the inline JSON config block in index.html
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub api_base_url: String,
    pub default_image_url: String,
    pub bootstrap_categories: Vec<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("LISTINGS_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            default_image_url: DEFAULT_IMAGE_URL.to_string(),
            bootstrap_categories: BOOTSTRAP_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON object; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the `<script id="app-config">` block, falling back to defaults
    pub fn from_document() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("[CONFIG] Ignoring invalid app config: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
