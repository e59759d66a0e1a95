//! Create Listing Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::{CategorySelect, ListingFields};
use crate::context::use_app_context;
use crate::forms::{self, CreateListingForm, DraftField};
use crate::navigation::{BrowserNotifier, RouterNavigator};

#[component]
pub fn CreateListingPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let form = RwSignal::new(CreateListingForm::new(&config.default_image_url));
    let navigate = StoredValue::new_local(use_navigate());

    // Load categories on mount
    Effect::new(move |_| {
        let api = ctx.api();
        let bootstrap = ctx.config().bootstrap_categories;
        spawn_local(async move {
            forms::create::load(&form, &api, &bootstrap, &BrowserNotifier).await;
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = ctx.api();
        let navigator = RouterNavigator::new(navigate.get_value());
        spawn_local(async move {
            forms::create::submit(&form, &api, &navigator, &BrowserNotifier).await;
        });
    };

    let draft = Signal::derive(move || form.with(|f| f.draft.clone()));
    let on_input = Callback::new(move |(field, value): (DraftField, String)| {
        form.update(|f| f.edit(field, value));
    });

    view! {
        <div class="create-container">
            <div class="create-paper">
                <h1 class="create-title">"Создать объявление"</h1>
                <form class="create-form" on:submit=on_submit>
                    <Show when=move || form.with(|f| f.is_loading())>
                        <p class="loading">"Загрузка категорий…"</p>
                    </Show>
                    <ListingFields draft=draft on_input=on_input>
                        <CategorySelect
                            categories=Signal::derive(move || form.with(|f| f.categories.clone()))
                            selected=Signal::derive(move || form.with(|f| f.draft.category_id.clone()))
                            on_change=Callback::new(move |id: String| form.update(|f| f.select_category(&id)))
                        />
                    </ListingFields>
                    <button
                        type="submit"
                        class="create-button"
                        disabled=move || form.with(|f| f.submit.is_pending())
                    >
                        "Создать"
                    </button>
                </form>
            </div>
        </div>
    }
}
