//! Platform capability and permission states.

/// Result of the one-time push capability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The host lacks background-worker or push-messaging support.
    Unsupported,
    /// Push works only from an installed/standalone launch on this platform,
    /// and the app is currently running in a plain browser tab.
    RequiresInstall,
    /// All prerequisites are present.
    Ready,
}

/// Notification permission state as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    /// The user has not been asked yet.
    Default,
    Granted,
    Denied,
}
