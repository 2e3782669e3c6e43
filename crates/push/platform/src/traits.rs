//! Platform traits.
//!
//! The host platform owns worker registrations, push subscriptions, and the
//! permission prompt; these traits are the narrow surface the manager drives.

use push_core::{Capability, CreateError, PermissionState, Subscription, WorkerState};
use tokio::sync::watch;

/// How the platform may serve the worker script from its HTTP cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateViaCache {
    /// Always bypass the cache so the worker definition is never stale.
    #[default]
    None,
    /// Cache imported scripts only.
    Imports,
    /// Platform default caching.
    All,
}

/// Options for registering a background worker.
#[derive(Debug, Clone)]
pub struct RegisterOptions {
    /// URL path the registration covers.
    pub scope: String,
    pub update_via_cache: UpdateViaCache,
}

/// Options for creating a push subscription.
#[derive(Debug, Clone)]
pub struct SubscribeOptions {
    /// Every push must surface a user-visible notification.
    pub user_visible_only: bool,
    /// Decoded VAPID public key identifying the application server.
    pub application_server_key: Vec<u8>,
}

/// Capability probe and permission prompt.
#[trait_variant::make(Send)]
pub trait HostPlatform: Send + Sync {
    /// Evaluate push capability, once, up front.
    fn capability(&self) -> Capability;

    /// The device's user-agent string, forwarded on persistence.
    fn user_agent(&self) -> String;

    /// Current permission state without prompting.
    fn permission(&self) -> PermissionState;

    /// Show the permission prompt and return the user's decision.
    async fn request_permission(&self) -> PermissionState;
}

/// A background worker instance.
pub trait Worker: Send + Sync {
    /// Current lifecycle state.
    fn state(&self) -> WorkerState;

    /// Observe state transitions. Dropping the receiver detaches the
    /// observer, so a caller waiting for a single transition holds it only
    /// until the first match.
    fn state_changes(&self) -> watch::Receiver<WorkerState>;

    /// Signal a waiting worker to skip the waiting phase.
    fn skip_waiting(&self);
}

/// A worker registration scoped to a URL path.
///
/// The platform's push broker hangs off the registration, so subscription
/// access lives here too.
#[trait_variant::make(Send)]
pub trait Registration: Send + Sync {
    type Worker: Worker;

    fn installing(&self) -> Option<Self::Worker>;
    fn waiting(&self) -> Option<Self::Worker>;
    fn active(&self) -> Option<Self::Worker>;

    /// Existing subscription for this registration, if any.
    async fn get_subscription(&self) -> color_eyre::eyre::Result<Option<Subscription>>;

    /// Create a new subscription, classified per [`CreateError`] on failure.
    async fn create_subscription(
        &self,
        options: &SubscribeOptions,
    ) -> Result<Subscription, CreateError>;

    /// Tear down the current subscription. Returns whether one was removed.
    async fn unsubscribe(&self) -> color_eyre::eyre::Result<bool>;
}

/// The platform's registry of worker registrations.
#[trait_variant::make(Send)]
pub trait WorkerRegistry: Send + Sync {
    type Registration: Registration;

    /// Look up the registration covering `scope`.
    async fn get_registration(
        &self,
        scope: &str,
    ) -> color_eyre::eyre::Result<Option<Self::Registration>>;

    /// Register a worker from `script`.
    async fn register(
        &self,
        script: &str,
        options: &RegisterOptions,
    ) -> color_eyre::eyre::Result<Self::Registration>;

    /// Generic readiness signal: resolves once some registration for the
    /// page is active.
    async fn ready(&self);
}
