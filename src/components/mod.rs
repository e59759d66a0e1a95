//! UI Components
//!
//! Reusable Leptos components.

mod category_select;
mod listing_fields;

pub use category_select::CategorySelect;
pub use listing_fields::ListingFields;
