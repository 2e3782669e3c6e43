//! Notification payload model for push messages.

/// Payload carried by a push message.
///
/// Servers send JSON; anything that fails to parse is treated as a plain
/// text body.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NotificationPayload {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

fn default_title() -> String {
    "Notification".into()
}

impl NotificationPayload {
    /// Parse a push payload, falling back to plain text on non-JSON data.
    pub fn parse(data: &[u8]) -> Self {
        serde_json::from_slice(data).unwrap_or_else(|_| Self::from_text(data))
    }

    fn from_text(data: &[u8]) -> Self {
        let text = String::from_utf8_lossy(data).trim().to_string();
        let body = if text.is_empty() {
            "You have a notification".to_string()
        } else {
            text
        };
        Self {
            title: "New notification".into(),
            body: Some(body),
            icon: None,
            badge: None,
            url: None,
            tag: None,
        }
    }
}
