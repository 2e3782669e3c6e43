//! Notification click routing.

/// An open window client as reported by the platform.
#[derive(Debug, Clone)]
pub struct WindowClient {
    pub url: String,
    pub focusable: bool,
}

/// What to do when a notification is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Focus the window at this index in the reported client list.
    Focus(usize),
    /// Open a new window at the target URL.
    Open(String),
}

/// Route a click to an existing window matching the target path, else open
/// a new one. The notification itself is always closed first.
pub fn route_click(target_url: &str, windows: &[WindowClient]) -> ClickAction {
    let path = url_path(target_url);
    for (index, window) in windows.iter().enumerate() {
        if window.focusable && window.url.contains(&path) {
            return ClickAction::Focus(index);
        }
    }
    ClickAction::Open(target_url.to_string())
}

/// Path component of an absolute or site-relative URL, without query or
/// fragment.
fn url_path(url: &str) -> String {
    let without_scheme = match url.split_once("://") {
        Some((_, rest)) => match rest.split_once('/') {
            Some((_, path)) => format!("/{path}"),
            None => "/".to_string(),
        },
        None => url.to_string(),
    };
    without_scheme
        .split(['?', '#'])
        .next()
        .unwrap_or("/")
        .to_string()
}
