//! Routed Pages

mod create_listing;
mod edit_listing;
mod placeholders;

pub use create_listing::CreateListingPage;
pub use edit_listing::EditListingPage;
pub use placeholders::{IndexPlaceholder, ListingPlaceholder};
