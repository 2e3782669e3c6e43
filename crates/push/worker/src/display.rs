//! Push display policy.

use push_core::NotificationPayload;

/// Per-deployment display defaults.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub default_icon: String,
    pub default_badge: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_icon: "/images/logo-192-192.png".into(),
            default_badge: "/images/logo-192-192.png".into(),
        }
    }
}

/// Options forwarded to the platform's notification display call.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DisplayOptions {
    pub body: Option<String>,
    pub icon: String,
    pub badge: String,
    /// Target URL carried into the click handler.
    pub url: String,
    pub tag: Option<String>,
    pub vibrate: Vec<u32>,
    /// Auto-dismiss; mobile platforms misbehave otherwise.
    pub require_interaction: bool,
}

/// Resolve a push payload into a notification title and display options.
pub fn on_push(config: &DisplayConfig, data: &[u8]) -> (String, DisplayOptions) {
    let payload = NotificationPayload::parse(data);
    tracing::debug!(title = %payload.title, "push received");

    let options = DisplayOptions {
        body: payload.body,
        icon: payload.icon.unwrap_or_else(|| config.default_icon.clone()),
        badge: payload.badge.unwrap_or_else(|| config.default_badge.clone()),
        url: payload.url.unwrap_or_else(|| "/".into()),
        tag: payload.tag,
        vibrate: vec![200, 100, 200],
        require_interaction: false,
    };
    (payload.title, options)
}
