//! Configuration for the span tagging libraries.
//!
//! Settings are read through a [`ConfigSource`], which resolves a [`ConfigKey`] to its raw string
//! value. The raw values are decoded once into a typed [`Config`], which is then passed by
//! reference to all normalization and tagging operations.
//!
//! ```
//! use spantag_config::{Config, ConfigKey, MapSource};
//!
//! let source = MapSource::new()
//!     .with(ConfigKey::ResourceUriFragmentRegex, "^v\\d+$")
//!     .with(ConfigKey::PeerServiceDefaultsEnabled, "true");
//!
//! let config = Config::from_source(&source);
//! assert!(config.peer_service().enabled);
//! ```

#![warn(missing_docs)]

mod config;
mod decode;
mod key;
mod source;

pub use self::config::*;
pub use self::decode::*;
pub use self::key::*;
pub use self::source::*;
