//! Listing Forms
//!
//! Framework-independent state and submit flow for the create and edit pages.
//! Pages keep the form in a `RwSignal`; tests keep it in a `RefCell`.

pub mod create;
mod draft;
pub mod edit;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

use crate::error::{ApiError, FormError};
use crate::models::Listing;

pub use create::CreateListingForm;
pub use draft::{DraftField, ListingDraft};
pub use edit::EditListingForm;

pub const NOT_FOUND_MESSAGE: &str = "Объявление не найдено";

/// Reference/seed data status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// Edit target absent (edit page only)
    NotFound,
}

/// Submission lifecycle. `Failed` is editable and submittable like `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl SubmitState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmitState::Pending)
    }

    fn settle<T>(&mut self, result: &Result<T, ApiError>) {
        *self = match result {
            Ok(_) => SubmitState::Succeeded,
            Err(err) => SubmitState::Failed(err.to_string()),
        };
    }
}

/// What became of one submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Saved and navigated away
    Saved(Listing),
    /// Stopped before any network call
    Rejected(FormError),
    /// The API rejected the mutation; the draft is untouched
    Failed(ApiError),
}

/// Shared mutable slot holding a form.
///
/// `modify` returns `None` once the owning page is gone. Borrows never span
/// an `.await`.
pub trait FormCell<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> FormCell<T> for RwSignal<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> FormCell<T> for RefCell<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
