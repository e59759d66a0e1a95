//! Listings API
//!
//! The collaborator both form pages talk to, and its HTTP implementation.

mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Category, Listing, ListingInput};

pub use http::HttpListingApi;

/// Remote listings service.
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait ListingApi {
    async fn get_categories(&self) -> ApiResult<Vec<Category>>;

    async fn create_category(&self, name: &str) -> ApiResult<Category>;

    async fn get_listings(&self) -> ApiResult<Vec<Listing>>;

    /// Fetch one listing by id.
    ///
    /// Falls back to scanning the full collection for services without a
    /// direct lookup.
    async fn get_listing(&self, id: &str) -> ApiResult<Option<Listing>> {
        let listings = self.get_listings().await?;
        Ok(listings.into_iter().find(|l| l.id == id))
    }

    async fn create_listing(&self, input: &ListingInput) -> ApiResult<Listing>;

    /// Update fields of an existing listing. The id is never part of `input`.
    async fn update_listing(&self, id: &str, input: &ListingInput) -> ApiResult<Listing>;
}
