//! Edit-Listing Form
//!
//! Seeds a draft from an existing listing and submits field updates.

use super::{DraftField, FormCell, ListingDraft, LoadState, SubmitOutcome, SubmitState};
use crate::api::ListingApi;
use crate::error::FormError;
use crate::models::{Category, Listing, ListingInput};
use crate::navigation::{listing_path, Navigator, Notifier};

pub const UPDATE_FAILED_MESSAGE: &str = "Ошибка при обновлении объявления.";
pub const LISTING_FAILED_MESSAGE: &str = "Не удалось загрузить объявление.";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditListingForm {
    /// Route parameter `listingId`
    pub listing_id: Option<String>,
    pub load: LoadState,
    pub categories: Vec<Category>,
    /// `None` until the listing is found
    pub draft: Option<ListingDraft>,
    pub submit: SubmitState,
}

impl EditListingForm {
    pub fn new(listing_id: Option<String>) -> Self {
        Self {
            listing_id: listing_id.filter(|id| !id.is_empty()),
            ..Default::default()
        }
    }

    /// Seed the draft. The listing's own category stays selectable even when
    /// the loaded collection lacks it.
    pub fn seed(&mut self, listing: &Listing, mut categories: Vec<Category>) {
        let mut draft = ListingDraft::from_listing(listing);
        draft.resolve_category(&categories);
        let known = categories.iter().any(|c| c.id == draft.category_id);
        if !draft.category_id.is_empty() && !known {
            categories.push(Category {
                id: draft.category_id.clone(),
                name: draft.category_name.clone(),
            });
        }
        self.draft = Some(draft);
        self.categories = categories;
        self.load = LoadState::Ready;
    }

    pub fn mark_not_found(&mut self) {
        self.draft = None;
        self.load = LoadState::NotFound;
    }

    /// Whether the form should be shown at all
    pub fn is_editable(&self) -> bool {
        self.load == LoadState::Ready && self.draft.is_some()
    }

    pub fn edit(&mut self, field: DraftField, value: String) {
        if let Some(draft) = self.draft.as_mut() {
            draft.set(field, value);
        }
    }

    pub fn select_category(&mut self, id: &str) {
        if let Some(draft) = self.draft.as_mut() {
            draft.select_category(&self.categories, id);
        }
    }

    /// Stored category name with no matching id, kept as-is on update
    pub fn unresolved_category(&self) -> Option<&str> {
        self.draft
            .as_ref()
            .filter(|d| d.category_id.is_empty() && !d.category_name.is_empty())
            .map(|d| d.category_name.as_str())
    }

    /// Validate and mark the submission pending. Yields the target id too.
    pub fn begin_submit(&mut self) -> Result<(String, ListingInput), FormError> {
        let (Some(id), Some(draft)) = (&self.listing_id, &self.draft) else {
            return Err(FormError::NotReady);
        };
        if self.submit.is_pending() {
            return Err(FormError::InFlight);
        }
        let input = draft.validate()?;
        let id = id.clone();
        self.submit = SubmitState::Pending;
        Ok((id, input))
    }
}

/// Page-mount load: the listing and the category choices, concurrently
pub async fn load<C, A, M>(form: &C, api: &A, notifier: &M)
where
    C: FormCell<EditListingForm>,
    A: ListingApi + ?Sized,
    M: Notifier + ?Sized,
{
    let Some(id) = form.modify(|f| f.listing_id.clone()).flatten() else {
        form.modify(|f| f.mark_not_found());
        return;
    };

    let (listing, categories) = futures::join!(api.get_listing(&id), api.get_categories());

    let categories = categories.unwrap_or_else(|err| {
        log::warn!("[EDIT] Error loading categories: {}", err);
        Vec::new()
    });

    // The route may have moved on to another listing meanwhile
    let current = form.modify(|f| f.listing_id.as_deref() == Some(id.as_str()));
    if current != Some(true) {
        log::debug!("[EDIT] Dropping stale load of {}", id);
        return;
    }

    match listing {
        Ok(Some(listing)) => {
            form.modify(|f| f.seed(&listing, categories));
        }
        Ok(None) => {
            log::info!("[EDIT] Listing {} not found", id);
            form.modify(|f| f.mark_not_found());
        }
        Err(err) => {
            log::error!("[EDIT] Error fetching listing {}: {}", id, err);
            notifier.alert(LISTING_FAILED_MESSAGE);
            form.modify(|f| f.mark_not_found());
        }
    }
}

/// Validate, update, and navigate to the listing's detail page on success
pub async fn submit<C, A, N, M>(form: &C, api: &A, navigator: &N, notifier: &M) -> SubmitOutcome
where
    C: FormCell<EditListingForm>,
    A: ListingApi + ?Sized,
    N: Navigator + ?Sized,
    M: Notifier + ?Sized,
{
    let (id, input) = match form.modify(|f| f.begin_submit()) {
        Some(Ok(started)) => started,
        Some(Err(err)) => {
            if err.is_user_facing() {
                notifier.alert(&err.to_string());
            }
            return SubmitOutcome::Rejected(err);
        }
        None => return SubmitOutcome::Rejected(FormError::NotReady),
    };

    let result = api.update_listing(&id, &input).await;
    form.modify(|f| f.submit.settle(&result));

    match result {
        Ok(listing) => {
            log::info!("[EDIT] Updated listing {}", id);
            navigator.navigate(&listing_path(&id));
            SubmitOutcome::Saved(listing)
        }
        Err(err) => {
            log::error!("[EDIT] Error updating listing {}: {}", id, err);
            notifier.alert(UPDATE_FAILED_MESSAGE);
            SubmitOutcome::Failed(err)
        }
    }
}
