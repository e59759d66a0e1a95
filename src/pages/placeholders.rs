//! Host Page Stand-ins
//!
//! The index and detail pages belong to the host app. These keep the redirect
//! targets of both forms routable when the client runs on its own.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::navigation::{edit_path, CREATE_PATH};

/// Route `/`, target of a successful create
#[component]
pub fn IndexPlaceholder() -> impl IntoView {
    view! {
        <div class="placeholder">
            <p>"Объявление сохранено."</p>
            <A href=CREATE_PATH>"Создать объявление"</A>
        </div>
    }
}

/// Route `/listing/:listingId`, target of a successful update
#[component]
pub fn ListingPlaceholder() -> impl IntoView {
    let params = use_params_map();
    let listing_id = move || params.with(|p| p.get("listingId")).unwrap_or_default();

    view! {
        <div class="placeholder">
            <p>"Объявление сохранено."</p>
            <A href=move || edit_path(&listing_id())>"Редактировать"</A>
        </div>
    }
}
