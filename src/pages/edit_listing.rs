//! Edit Listing Page
//!
//! Route `/edit/:listingId`. Shows "not found" until the listing is loaded.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::{CategorySelect, ListingFields};
use crate::context::use_app_context;
use crate::forms::{self, DraftField, EditListingForm, NOT_FOUND_MESSAGE};
use crate::navigation::{BrowserNotifier, RouterNavigator};

#[component]
pub fn EditListingPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let form = RwSignal::new(EditListingForm::default());
    let navigate = StoredValue::new_local(use_navigate());

    // Reload whenever the route's listing id changes
    Effect::new(move |_| {
        let listing_id = params.with(|p| p.get("listingId"));
        form.set(EditListingForm::new(listing_id));
        let api = ctx.api();
        spawn_local(async move {
            forms::edit::load(&form, &api, &BrowserNotifier).await;
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = ctx.api();
        let navigator = RouterNavigator::new(navigate.get_value());
        spawn_local(async move {
            forms::edit::submit(&form, &api, &navigator, &BrowserNotifier).await;
        });
    };

    let editable = Memo::new(move |_| form.with(|f| f.is_editable()));
    let draft = Signal::derive(move || form.with(|f| f.draft.clone().unwrap_or_default()));

    view! {
        {move || {
            if !editable.get() {
                return view! { <p class="not-found">{NOT_FOUND_MESSAGE}</p> }.into_any();
            }
            view! {
                <div class="edit-container">
                    <div class="edit-paper">
                        <h1 class="edit-title">"Редактировать объявление"</h1>
                        <form class="edit-form" on:submit=on_submit>
                            <ListingFields
                                draft=draft
                                on_input=Callback::new(move |(field, value): (DraftField, String)| {
                                    form.update(|f| f.edit(field, value));
                                })
                            >
                                <CategorySelect
                                    categories=Signal::derive(move || form.with(|f| f.categories.clone()))
                                    unset_label=Signal::derive(move || {
                                        form.with(|f| f.unresolved_category().unwrap_or("—").to_string())
                                    })
                                    selected=Signal::derive(move || {
                                        form.with(|f| {
                                            f.draft.as_ref().map(|d| d.category_id.clone()).unwrap_or_default()
                                        })
                                    })
                                    on_change=Callback::new(move |id: String| form.update(|f| f.select_category(&id)))
                                />
                            </ListingFields>
                            <button
                                type="submit"
                                class="edit-button"
                                disabled=move || form.with(|f| f.submit.is_pending())
                            >
                                "Сохранить"
                            </button>
                        </form>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}
