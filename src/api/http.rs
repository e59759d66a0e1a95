//! HTTP Listings API
//!
//! REST bindings over `reqwest` (browser `fetch` on wasm32).

use async_trait::async_trait;
use percent_encoding::utf8_percent_encode;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ListingApi;
use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Category, Listing, ListingInput};
use crate::navigation::PATH_SEGMENT;

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct CreateCategoryBody<'a> {
    name: &'a str,
}

// ========================
// Client
// ========================

#[derive(Debug, Clone)]
pub struct HttpListingApi {
    client: Client,
    base_url: String,
}

impl HttpListingApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn entity_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            collection,
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status { status: status.as_u16() });
    }
    Ok(response.json::<T>().await?)
}

#[async_trait(?Send)]
impl ListingApi for HttpListingApi {
    async fn get_categories(&self) -> ApiResult<Vec<Category>> {
        let response = self.client.get(self.collection_url("categories")).send().await?;
        decode(response).await
    }

    async fn create_category(&self, name: &str) -> ApiResult<Category> {
        let response = self
            .client
            .post(self.collection_url("categories"))
            .json(&CreateCategoryBody { name })
            .send()
            .await?;
        decode(response).await
    }

    async fn get_listings(&self) -> ApiResult<Vec<Listing>> {
        let response = self.client.get(self.collection_url("listings")).send().await?;
        decode(response).await
    }

    async fn get_listing(&self, id: &str) -> ApiResult<Option<Listing>> {
        let response = self.client.get(self.entity_url("listings", id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(response).await.map(Some)
    }

    async fn create_listing(&self, input: &ListingInput) -> ApiResult<Listing> {
        let response = self
            .client
            .post(self.collection_url("listings"))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    async fn update_listing(&self, id: &str, input: &ListingInput) -> ApiResult<Listing> {
        let response = self
            .client
            .put(self.entity_url("listings", id))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }
}
