//! Push Subscription Manager
//!
//! Drives a device from "not subscribed" to "subscribed, with the
//! subscription known to the server", and back. The host platform and the
//! backend API are injected through the `push-platform` and `push-api`
//! traits.

mod config;
mod manager;

pub use config::*;
pub use manager::*;
