//! Push Worker Policy
//!
//! Decision logic for the background worker's event handlers: take over
//! immediately on install/activate, turn push payloads into notifications,
//! and route notification clicks to an existing window or a new one.

mod click;
mod display;
mod events;

pub use click::*;
pub use display::*;
pub use events::*;
