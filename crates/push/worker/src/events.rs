//! Worker lifecycle events.

use serde::{Deserialize, Serialize};

/// Directive produced by the install event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallAction {
    pub skip_waiting: bool,
}

/// Directives produced by the activate event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivateAction {
    pub claim_clients: bool,
    /// Caches left behind by previous app versions, to be dropped.
    pub delete_caches: Vec<String>,
}

/// Messages pages may post to the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorkerMessage {
    #[serde(rename = "SKIP_WAITING")]
    SkipWaiting,
}

impl WorkerMessage {
    /// Parse a posted message; unknown shapes are ignored.
    pub fn parse(data: &[u8]) -> Option<Self> {
        serde_json::from_slice(data).ok()
    }
}

/// A new worker takes over immediately rather than waiting for old clients
/// to close.
pub fn on_install() -> InstallAction {
    tracing::debug!("worker installing");
    InstallAction { skip_waiting: true }
}

/// Claim all clients and drop caches matching the stale marker.
pub fn on_activate(cache_names: &[String], stale_marker: &str) -> ActivateAction {
    let delete_caches: Vec<String> = cache_names
        .iter()
        .filter(|name| name.contains(stale_marker))
        .cloned()
        .collect();
    tracing::debug!(stale = delete_caches.len(), "worker activating");
    ActivateAction {
        claim_clients: true,
        delete_caches,
    }
}
