//! Push subscription types.

/// Credential material issued alongside a push subscription.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubscriptionKeys {
    /// P-256 ECDH public key of the receiving device.
    pub p256dh: String,
    /// Authentication secret shared with the push service.
    pub auth: String,
}

/// A platform-issued push subscription.
///
/// The platform holds the canonical copy. This is the serializable view the
/// manager reads and forwards to the backend for persistence.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Push service endpoint URL for this device.
    pub endpoint: String,
    /// Encryption credentials.
    pub keys: SubscriptionKeys,
    /// Expiration timestamp in milliseconds, if the push service sets one.
    #[serde(default)]
    pub expiration_time: Option<i64>,
}
