//! Navigation & Alerts
//!
//! Route paths plus the router and alert collaborators used by the forms.

use leptos_router::NavigateOptions;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped inside a single URL path segment (RFC 3986 unreserved kept)
pub const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Listing index (owned by the host app)
pub const INDEX_PATH: &str = "/";
pub const CREATE_PATH: &str = "/create";

/// Detail page of one listing (owned by the host app)
pub fn listing_path(id: &str) -> String {
    format!("/listing/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

pub fn edit_path(id: &str) -> String {
    format!("/edit/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

/// Client-side router
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Blocking user-facing messages
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Adapts the closure returned by `leptos_router::hooks::use_navigate`
#[derive(Clone)]
pub struct RouterNavigator<F>(F);

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self(navigate)
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        log::debug!("[NAV] -> {}", path);
        (self.0)(path, NavigateOptions::default());
    }
}

/// `window.alert`
#[derive(Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!("[ALERT] could not show alert: {}", message);
        }
    }
}
