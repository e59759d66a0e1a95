//! Listing Draft
//!
//! Editable copy of a listing's fields and its validation.

use crate::error::FormError;
use crate::models::{Category, Listing, ListingInput};

/// Text fields bound to plain inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Price,
    ImageUrl,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    /// Raw text of the price input
    pub price: String,
    pub category_id: String,
    pub category_name: String,
    pub image_url: String,
}

impl ListingDraft {
    pub fn new(default_image_url: &str) -> Self {
        Self {
            price: "0".to_string(),
            image_url: default_image_url.to_string(),
            ..Default::default()
        }
    }

    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            title: listing.title.clone(),
            description: listing.description.clone(),
            price: listing.price.to_string(),
            category_id: listing.category_id.clone(),
            category_name: listing.category_name.clone(),
            image_url: listing.image_url.clone(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Description => self.description = value,
            DraftField::Price => self.price = value,
            DraftField::ImageUrl => self.image_url = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::Price => &self.price,
            DraftField::ImageUrl => &self.image_url,
        }
    }

    /// Select by id; the name always follows the selected category
    pub fn select_category(&mut self, categories: &[Category], id: &str) {
        self.category_id = id.to_string();
        self.category_name = categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
    }

    /// Fill a missing category id by matching the stored name
    pub fn resolve_category(&mut self, categories: &[Category]) {
        if !self.category_id.is_empty() {
            return;
        }
        if let Some(category) = categories.iter().find(|c| c.name == self.category_name) {
            self.category_id = category.id.clone();
        }
    }

    pub fn price_value(&self) -> Option<f64> {
        parse_price(&self.price)
    }

    /// Needs some category reference: an id, or a stored name on older listings
    pub fn validate(&self) -> Result<ListingInput, FormError> {
        if self.category_id.is_empty() && self.category_name.is_empty() {
            return Err(FormError::MissingCategory);
        }
        let price = self.price_value().ok_or(FormError::InvalidPrice)?;
        Ok(ListingInput {
            title: self.title.clone(),
            description: self.description.clone(),
            price,
            category_id: self.category_id.clone(),
            category_name: self.category_name.clone(),
            image_url: self.image_url.clone(),
        })
    }
}

/// Parse a price input. Blank means zero; negatives and non-numbers are rejected.
pub fn parse_price(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    text.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}
