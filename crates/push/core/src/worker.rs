//! Background worker lifecycle states.

/// Lifecycle state of a background worker.
///
/// The platform owns the transitions; `Redundant` is terminal and the worker
/// is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerState {
    /// The worker script is being installed.
    Installing,
    /// Installed but not activated, typically because an older worker still
    /// controls the page.
    Waiting,
    /// Activated and able to receive push events.
    Active,
    /// Replaced or failed; will never activate.
    Redundant,
}

impl WorkerState {
    /// Whether this state can still reach `Active`.
    pub fn can_activate(self) -> bool {
        matches!(self, Self::Installing | Self::Waiting)
    }
}
