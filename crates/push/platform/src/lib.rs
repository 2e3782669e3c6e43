//! Push Platform Seams
//!
//! Traits over the host platform's worker registry, push broker, and
//! permission prompt, plus the persisted "already prompted" flag.

mod prompt;
mod traits;

pub use prompt::*;
pub use traits::*;
