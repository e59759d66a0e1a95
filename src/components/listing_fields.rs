//! Listing Fields Component
//!
//! Text inputs shared by the create and edit forms.

use leptos::prelude::*;

use crate::forms::{DraftField, ListingDraft};

/// Title, description and price, then `children` (the category picker), then image URL
#[component]
pub fn ListingFields(
    #[prop(into)] draft: Signal<ListingDraft>,
    #[prop(into)] on_input: Callback<(DraftField, String)>,
    children: Children,
) -> impl IntoView {
    let value = move |field: DraftField| move || draft.with(|d| d.get(field).to_string());

    view! {
        <label class="form-field">
            <span>"Название"</span>
            <input
                type="text"
                name="title"
                required=true
                prop:value=value(DraftField::Title)
                on:input=move |ev| on_input.run((DraftField::Title, event_target_value(&ev)))
            />
        </label>
        <label class="form-field">
            <span>"Описание"</span>
            <textarea
                name="description"
                rows="4"
                required=true
                prop:value=value(DraftField::Description)
                on:input=move |ev| on_input.run((DraftField::Description, event_target_value(&ev)))
            ></textarea>
        </label>
        <label class="form-field">
            <span>"Цена"</span>
            <input
                type="number"
                name="price"
                min="0"
                step="any"
                required=true
                prop:value=value(DraftField::Price)
                on:input=move |ev| on_input.run((DraftField::Price, event_target_value(&ev)))
            />
        </label>
        {children()}
        <label class="form-field">
            <span>"Ссылка на картинку"</span>
            <input
                type="url"
                name="imageUrl"
                prop:value=value(DraftField::ImageUrl)
                on:input=move |ev| on_input.run((DraftField::ImageUrl, event_target_value(&ev)))
            />
        </label>
    }
}
