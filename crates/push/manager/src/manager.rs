//! Push subscription lifecycle orchestration.

use push_api::SubscriptionApi;
use push_core::{Capability, PermissionState, PushError, Subscription, WorkerState, vapid};
use push_platform::{
    HostPlatform, PromptStore, RegisterOptions, Registration, SubscribeOptions, UpdateViaCache,
    Worker, WorkerRegistry,
};

use crate::ManagerConfig;

/// Read-only snapshot of push state on this device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushStatus {
    /// Whether the host has background-worker and push-messaging support.
    pub supported: bool,
    pub permission: PermissionState,
    /// Whether an active subscription currently exists.
    pub subscribed: bool,
}

/// Orchestrates the per-device push handshake.
///
/// Operations are not internally serialized; callers gate concurrent
/// `subscribe` attempts (e.g. behind [`already_prompted`]) since racing
/// calls could register the worker twice.
///
/// [`already_prompted`]: PushSubscriptionManager::already_prompted
pub struct PushSubscriptionManager<P, W, A, S> {
    platform: P,
    registry: W,
    api: A,
    prompts: S,
    config: ManagerConfig,
}

impl<P, W, A, S> PushSubscriptionManager<P, W, A, S>
where
    P: HostPlatform,
    W: WorkerRegistry,
    A: SubscriptionApi,
    S: PromptStore,
{
    pub fn new(platform: P, registry: W, api: A, prompts: S, config: ManagerConfig) -> Self {
        Self {
            platform,
            registry,
            api,
            prompts,
            config,
        }
    }

    /// Whether the permission prompt has already been shown on this device.
    pub fn already_prompted(&self) -> bool {
        self.prompts.was_prompted().unwrap_or(false)
    }

    /// Drive the device to "subscribed and known to the server".
    ///
    /// Reuses the existing registration and subscription when present; the
    /// platform-level create call happens at most once per subscription.
    /// Every failure is terminal for this attempt and safe to retry.
    pub async fn subscribe(&self) -> Result<Subscription, PushError> {
        match self.platform.capability() {
            Capability::Unsupported => return Err(PushError::UnsupportedPlatform),
            Capability::RequiresInstall => return Err(PushError::RequiresInstallToHomeScreen),
            Capability::Ready => {}
        }

        tracing::info!("starting push subscription");

        let key = self
            .api
            .vapid_public_key()
            .await
            .map_err(PushError::KeyFetchFailed)?;
        tracing::debug!("VAPID key fetched");

        let registration = self.obtain_registration().await?;
        self.await_active(&registration).await?;
        tracing::debug!("worker is active");

        let permission = self.platform.request_permission().await;
        if let Err(e) = self.prompts.mark_prompted() {
            tracing::warn!(error = %e, "failed to persist prompt flag");
        }
        tracing::debug!(?permission, "permission prompt answered");
        if permission != PermissionState::Granted {
            return Err(PushError::PermissionDenied);
        }

        let subscription = match registration
            .get_subscription()
            .await
            .map_err(|e| PushError::SubscriptionCreateFailed(e.to_string()))?
        {
            Some(existing) => {
                tracing::debug!(endpoint = %existing.endpoint, "reusing existing subscription");
                existing
            }
            None => {
                let server_key = vapid::decode_key(&key).map_err(PushError::KeyFetchFailed)?;
                let options = SubscribeOptions {
                    user_visible_only: true,
                    application_server_key: server_key,
                };
                let created = registration.create_subscription(&options).await?;
                tracing::info!(endpoint = %created.endpoint, "push subscription created");
                created
            }
        };

        // The one partial-success case: on failure here the device is
        // subscribed but the server does not know about it yet.
        self.api
            .persist_subscription(&subscription, &self.platform.user_agent())
            .await
            .map_err(PushError::BackendPersistFailed)?;
        tracing::info!(endpoint = %subscription.endpoint, "subscription persisted to backend");

        Ok(subscription)
    }

    /// Tear down the device's push subscription.
    ///
    /// Returns `Ok(false)` when there is nothing to remove. A backend
    /// removal failure is logged and not rolled back; the platform state
    /// has already changed.
    pub async fn unsubscribe(&self) -> Result<bool, PushError> {
        let registration = match self.registry.get_registration(&self.config.scope).await {
            Ok(Some(registration)) => registration,
            Ok(None) => return Ok(false),
            Err(e) => {
                tracing::warn!(error = %e, "registration lookup failed during unsubscribe");
                return Ok(false);
            }
        };

        let subscription = match registration.get_subscription().await {
            Ok(Some(subscription)) => subscription,
            Ok(None) => return Ok(false),
            Err(e) => {
                tracing::warn!(error = %e, "subscription lookup failed during unsubscribe");
                return Ok(false);
            }
        };

        let removed = registration
            .unsubscribe()
            .await
            .map_err(|e| PushError::SubscriptionCreateFailed(e.to_string()))?;

        if removed {
            if let Err(e) = self.api.remove_subscription(&subscription.endpoint).await {
                tracing::warn!(error = %e, "backend did not acknowledge unsubscribe");
            }
            tracing::info!(endpoint = %subscription.endpoint, "push subscription removed");
        }

        Ok(removed)
    }

    /// Read-only probe of support, permission, and subscription presence.
    /// Never mutates platform state.
    pub async fn status(&self) -> PushStatus {
        let supported = self.platform.capability() != Capability::Unsupported;
        let permission = self.platform.permission();

        let subscribed = match self.registry.get_registration(&self.config.scope).await {
            Ok(Some(registration)) => {
                matches!(registration.get_subscription().await, Ok(Some(_)))
            }
            _ => false,
        };

        PushStatus {
            supported,
            permission,
            subscribed,
        }
    }

    async fn obtain_registration(&self) -> Result<W::Registration, PushError> {
        let existing = self
            .registry
            .get_registration(&self.config.scope)
            .await
            .map_err(|e| PushError::SubscriptionCreateFailed(e.to_string()))?;

        if let Some(registration) = existing {
            return Ok(registration);
        }

        tracing::debug!(script = %self.config.worker_script, "no registration found, registering worker");
        let options = RegisterOptions {
            scope: self.config.scope.clone(),
            update_via_cache: UpdateViaCache::None,
        };
        self.registry
            .register(&self.config.worker_script, &options)
            .await
            .map_err(|e| PushError::SubscriptionCreateFailed(e.to_string()))
    }

    /// Wait until the registration's worker is active, bounded by the
    /// configured timeout.
    async fn await_active(&self, registration: &W::Registration) -> Result<(), PushError> {
        if registration.active().is_some() {
            return Ok(());
        }

        let timeout = self.config.activation_timeout();
        tracing::debug!(?timeout, "waiting for worker activation");

        let wait = async {
            if let Some(worker) = registration.installing() {
                wait_for_activation(worker).await
            } else if let Some(worker) = registration.waiting() {
                // An older worker may still control the page; tell this one
                // to skip the waiting phase.
                worker.skip_waiting();
                wait_for_activation(worker).await
            } else {
                self.registry.ready().await;
                Ok(())
            }
        };

        tokio::time::timeout(timeout, wait)
            .await
            .map_err(|_| PushError::ActivationTimeout(timeout))?
    }
}

/// Single-shot observation: resolve on `Active`, reject on `Redundant`.
async fn wait_for_activation<T: Worker>(worker: T) -> Result<(), PushError> {
    let mut states = worker.state_changes();
    loop {
        let state = *states.borrow();
        match state {
            WorkerState::Active => return Ok(()),
            WorkerState::Redundant => return Err(PushError::WorkerNotReady),
            WorkerState::Installing | WorkerState::Waiting => {}
        }
        if states.changed().await.is_err() {
            // Sender gone without the worker ever activating.
            return Err(PushError::WorkerNotReady);
        }
    }
}
