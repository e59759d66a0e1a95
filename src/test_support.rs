//! In-memory collaborators for form tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::api::ListingApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{Category, Listing, ListingInput};
use crate::navigation::{Navigator, Notifier};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetCategories,
    CreateCategory(String),
    GetListings,
    CreateListing(ListingInput),
    UpdateListing(String, ListingInput),
}

/// Listings service backed by vectors.
///
/// Does not override `get_listing`, so lookups go through the scanning default.
#[derive(Default)]
pub struct MockApi {
    pub categories: RefCell<Vec<Category>>,
    pub listings: RefCell<Vec<Listing>>,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
    calls: RefCell<Vec<Call>>,
}

impl MockApi {
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self { categories: RefCell::new(categories), ..Default::default() }
    }

    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self { listings: RefCell::new(listings), ..Default::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn mutation_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::CreateListing(_) | Call::UpdateListing(..)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn read_guard(&self) -> ApiResult<()> {
        if self.fail_reads.get() {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(())
    }

    fn write_guard(&self) -> ApiResult<()> {
        if self.fail_writes.get() {
            return Err(ApiError::Status { status: 500 });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ListingApi for MockApi {
    async fn get_categories(&self) -> ApiResult<Vec<Category>> {
        self.record(Call::GetCategories);
        self.read_guard()?;
        Ok(self.categories.borrow().clone())
    }

    async fn create_category(&self, name: &str) -> ApiResult<Category> {
        self.record(Call::CreateCategory(name.to_string()));
        self.write_guard()?;
        let mut categories = self.categories.borrow_mut();
        let category = Category {
            id: format!("cat-{}", categories.len() + 1),
            name: name.to_string(),
        };
        categories.push(category.clone());
        Ok(category)
    }

    async fn get_listings(&self) -> ApiResult<Vec<Listing>> {
        self.record(Call::GetListings);
        self.read_guard()?;
        Ok(self.listings.borrow().clone())
    }

    async fn create_listing(&self, input: &ListingInput) -> ApiResult<Listing> {
        self.record(Call::CreateListing(input.clone()));
        self.write_guard()?;
        let mut listings = self.listings.borrow_mut();
        let listing = Listing {
            id: format!("lst-{}", listings.len() + 1),
            title: input.title.clone(),
            description: input.description.clone(),
            price: input.price,
            category_id: input.category_id.clone(),
            category_name: input.category_name.clone(),
            image_url: input.image_url.clone(),
        };
        listings.push(listing.clone());
        Ok(listing)
    }

    async fn update_listing(&self, id: &str, input: &ListingInput) -> ApiResult<Listing> {
        self.record(Call::UpdateListing(id.to_string(), input.clone()));
        self.write_guard()?;
        let mut listings = self.listings.borrow_mut();
        let listing = listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(ApiError::Status { status: 404 })?;
        listing.title = input.title.clone();
        listing.description = input.description.clone();
        listing.price = input.price;
        listing.category_id = input.category_id.clone();
        listing.category_name = input.category_name.clone();
        listing.image_url = input.image_url.clone();
        Ok(listing.clone())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

pub fn category(id: &str, name: &str) -> Category {
    Category { id: id.to_string(), name: name.to_string() }
}

pub fn listing(id: &str, title: &str, price: f64, category: &Category) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} в хорошем состоянии", title),
        price,
        category_id: category.id.clone(),
        category_name: category.name.clone(),
        image_url: format!("https://img.example/{}.jpg", id),
    }
}
