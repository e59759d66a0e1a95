//! Error Types
//!
//! API failures and form submission rejections.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure talking to the listings API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {status}")]
    Status { status: u16 },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status { status: status.as_u16() }
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Reason a submit did not reach the API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Пожалуйста, выберите категорию")]
    MissingCategory,
    #[error("Укажите корректную цену")]
    InvalidPrice,
    /// A previous submit is still in flight
    #[error("submission already in progress")]
    InFlight,
    /// Nothing loaded to submit yet
    #[error("form is not ready")]
    NotReady,
}

impl FormError {
    /// Whether the user should be told about this rejection
    pub fn is_user_facing(&self) -> bool {
        matches!(self, FormError::MissingCategory | FormError::InvalidPrice)
    }
}
