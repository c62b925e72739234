//! Tags spans with derived names and peer services.
//!
//! These functions run after an integration has set all tags of a span. They only fill in
//! values that the integration did not set explicitly.

#![warn(missing_docs)]

mod name;
mod peer_service;

pub use self::name::*;
pub use self::peer_service::*;
