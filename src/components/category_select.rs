//! Category Select Component

use leptos::prelude::*;

use crate::models::Category;

#[component]
pub fn CategorySelect(
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    /// Text of the empty choice
    #[prop(into, default = Signal::stored("—".to_string()))] unset_label: Signal<String>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>"Категория"</span>
            <select
                name="categoryId"
                required=true
                prop:value=move || selected.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || selected.with(|s| s.is_empty())>
                    {move || unset_label.get()}
                </option>
                <For
                    each=move || categories.get()
                    key=|category| category.id.clone()
                    children=move |category: Category| {
                        let id = category.id.clone();
                        let is_selected = move || selected.with(|s| *s == id);
                        view! {
                            <option value=category.id selected=is_selected>
                                {category.name}
                            </option>
                        }
                    }
                />
            </select>
        </label>
    }
}
