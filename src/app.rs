//! Listing Board App
//!
//! Router shell for the create and edit pages and their redirect targets.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::navigation::CREATE_PATH;
use crate::pages::{CreateListingPage, EditListingPage, IndexPlaceholder, ListingPlaceholder};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! {
                    <p class="not-found">
                        "Страница не найдена. "
                        <A href=CREATE_PATH>"Создать объявление"</A>
                    </p>
                }>
                    <Route path=path!("/") view=IndexPlaceholder/>
                    <Route path=path!("/listing/:listingId") view=ListingPlaceholder/>
                    <Route path=path!("/create") view=CreateListingPage/>
                    <Route path=path!("/edit/:listingId") view=EditListingPage/>
                </Routes>
            </main>
        </Router>
    }
}
