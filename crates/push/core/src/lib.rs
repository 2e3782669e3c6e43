//! Push Subscription Core Types
//!
//! Shared data model and error taxonomy for the push subscription lifecycle.

mod capability;
mod error;
mod notification;
mod subscription;
pub mod vapid;
mod worker;

pub use capability::*;
pub use error::*;
pub use notification::*;
pub use subscription::*;
pub use worker::*;
