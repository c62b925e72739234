//! Span tagging for tracers.
//!
//! Tracer integrations capture raw strings from intercepted calls, such as URLs, paths and host
//! names. This crate turns them into tag values that are safe to attach to spans:
//!
//!  - resource names with identifiers replaced by `?` ([`normalization::normalize_path`]),
//!  - URLs without credentials and with filtered query strings ([`normalization::sanitize_url`]),
//!  - service names from hosts and socket paths
//!    ([`normalization::normalize_host_or_uds_as_service`]),
//!  - default operation names ([`spans::name_span`]),
//!  - `peer.service` tags ([`spans::PeerServiceTagger`]).
//!
//! All settings are decoded once into a [`Config`](config::Config). The [`SpanTagger`] bundles
//! the configuration with the operations that need it:
//!
//! ```
//! use spantag::SpanTagger;
//! use spantag::config::{Config, ConfigKey, MapSource};
//! use spantag::normalization::Direction;
//!
//! let source = MapSource::new().with(ConfigKey::ResourceUriMappingIncoming, "users/*");
//! let tagger = SpanTagger::new(Config::from_source(&source));
//!
//! assert_eq!(tagger.normalize_path("/users/bob/orders/42", Direction::Incoming), "/users/?/orders/?");
//! ```

#![warn(missing_docs)]

mod tagger;

pub use self::tagger::*;

pub use spantag_config as config;
pub use spantag_conventions as conventions;
pub use spantag_log as log;
pub use spantag_normalization as normalization;
pub use spantag_pattern as pattern;
pub use spantag_protocol as protocol;
pub use spantag_spans as spans;
