//! Create-Listing Form
//!
//! Loads (and on first run seeds) categories, then posts a new listing.

use futures::future::try_join_all;

use super::{DraftField, FormCell, ListingDraft, LoadState, SubmitOutcome, SubmitState};
use crate::api::ListingApi;
use crate::error::{ApiResult, FormError};
use crate::models::{Category, ListingInput};
use crate::navigation::{Navigator, Notifier, INDEX_PATH};

pub const CREATE_FAILED_MESSAGE: &str = "Ошибка при создании объявления.";
pub const CATEGORIES_FAILED_MESSAGE: &str = "Не удалось загрузить категории.";

#[derive(Debug, Clone, PartialEq)]
pub struct CreateListingForm {
    pub load: LoadState,
    pub categories: Vec<Category>,
    pub draft: ListingDraft,
    pub submit: SubmitState,
}

impl CreateListingForm {
    pub fn new(default_image_url: &str) -> Self {
        Self {
            load: LoadState::Loading,
            categories: Vec::new(),
            draft: ListingDraft::new(default_image_url),
            submit: SubmitState::Idle,
        }
    }

    pub fn categories_loaded(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.load = LoadState::Ready;
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn edit(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    pub fn select_category(&mut self, id: &str) {
        self.draft.select_category(&self.categories, id);
    }

    /// Validate and mark the submission pending
    pub fn begin_submit(&mut self) -> Result<ListingInput, FormError> {
        if self.submit.is_pending() {
            return Err(FormError::InFlight);
        }
        if self.draft.category_id.is_empty() {
            return Err(FormError::MissingCategory);
        }
        let input = self.draft.validate()?;
        self.submit = SubmitState::Pending;
        Ok(input)
    }
}

/// Fetch categories, creating the bootstrap set when none exist.
///
/// Bootstrap creations run concurrently; the result keeps bootstrap order and
/// replaces the empty fetch.
pub async fn fetch_categories<A>(api: &A, bootstrap: &[String]) -> ApiResult<Vec<Category>>
where
    A: ListingApi + ?Sized,
{
    let existing = api.get_categories().await?;
    if !existing.is_empty() || bootstrap.is_empty() {
        return Ok(existing);
    }

    log::info!("[CREATE] No categories yet, creating {} defaults", bootstrap.len());
    try_join_all(bootstrap.iter().map(|name| api.create_category(name))).await
}

/// Page-mount load
pub async fn load<C, A, M>(form: &C, api: &A, bootstrap: &[String], notifier: &M)
where
    C: FormCell<CreateListingForm>,
    A: ListingApi + ?Sized,
    M: Notifier + ?Sized,
{
    let categories = match fetch_categories(api, bootstrap).await {
        Ok(categories) => categories,
        Err(err) => {
            log::error!("[CREATE] Error loading categories: {}", err);
            notifier.alert(CATEGORIES_FAILED_MESSAGE);
            Vec::new()
        }
    };
    form.modify(|f| f.categories_loaded(categories));
}

/// Validate, post, and navigate to the index on success
pub async fn submit<C, A, N, M>(form: &C, api: &A, navigator: &N, notifier: &M) -> SubmitOutcome
where
    C: FormCell<CreateListingForm>,
    A: ListingApi + ?Sized,
    N: Navigator + ?Sized,
    M: Notifier + ?Sized,
{
    let input = match form.modify(|f| f.begin_submit()) {
        Some(Ok(input)) => input,
        Some(Err(err)) => {
            if err.is_user_facing() {
                notifier.alert(&err.to_string());
            }
            return SubmitOutcome::Rejected(err);
        }
        None => return SubmitOutcome::Rejected(FormError::NotReady),
    };

    let result = api.create_listing(&input).await;
    form.modify(|f| f.submit.settle(&result));

    match result {
        Ok(listing) => {
            log::info!("[CREATE] Created listing {}", listing.id);
            navigator.navigate(INDEX_PATH);
            SubmitOutcome::Saved(listing)
        }
        Err(err) => {
            log::error!("[CREATE] Error creating listing: {}", err);
            notifier.alert(CREATE_FAILED_MESSAGE);
            SubmitOutcome::Failed(err)
        }
    }
}
