//! Push Backend API
//!
//! HTTP client for the remote endpoints that issue VAPID key material and
//! persist subscriptions server-side.

mod client;

pub use client::*;
