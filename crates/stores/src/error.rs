use rideops_client::storage::StorageError;
use rideops_client::ApiError;
use rideops_core::error::CoreError;

/// Failure of a store operation: the request failed, the input was
/// rejected before any request was made, or local session storage failed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<validator::ValidationErrors> for StoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Core(errors.into())
    }
}

impl StoreError {
    /// Message to show the user: the backend's message, the local
    /// validation message, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api(e) => e.user_message(fallback),
            Self::Core(CoreError::Validation(message)) => message.clone(),
            Self::Core(_) | Self::Storage(_) => fallback.to_string(),
        }
    }
}
