//! Error taxonomy for the subscription lifecycle.

use std::time::Duration;

/// Classified failure from the platform's subscription-creation call.
#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    /// Permission-class failure: denied or revoked mid-flight.
    #[error("notification permission was denied or revoked")]
    Permission,
    /// Abort-class failure: the worker is not actually controlling yet.
    #[error("worker is not controlling the page yet")]
    Abort,
    /// Anything else, with the platform's reason.
    #[error("{0}")]
    Other(String),
}

/// Terminal failure of a subscribe or unsubscribe attempt.
///
/// None of these are retried internally. A failed attempt leaves the device
/// in a state where a fresh call is safe; `BackendPersistFailed` is the one
/// partial-success case (device subscribed, server unaware) and is
/// caller-retriable.
#[derive(Debug, thiserror::Error)]
pub enum PushError {
    #[error("push notifications are not supported on this platform")]
    UnsupportedPlatform,
    #[error("add the app to the home screen to enable notifications")]
    RequiresInstallToHomeScreen,
    #[error("failed to fetch VAPID public key: {0}")]
    KeyFetchFailed(color_eyre::eyre::Report),
    #[error("worker did not activate within {0:?}")]
    ActivationTimeout(Duration),
    #[error("notification permission was denied")]
    PermissionDenied,
    #[error("worker is not ready to receive pushes")]
    WorkerNotReady,
    #[error("failed to create push subscription: {0}")]
    SubscriptionCreateFailed(String),
    #[error("failed to persist subscription to backend: {0}")]
    BackendPersistFailed(color_eyre::eyre::Report),
}

impl From<CreateError> for PushError {
    fn from(error: CreateError) -> Self {
        match error {
            CreateError::Permission => Self::PermissionDenied,
            CreateError::Abort => Self::WorkerNotReady,
            CreateError::Other(reason) => Self::SubscriptionCreateFailed(reason),
        }
    }
}
