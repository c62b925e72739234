//! Normalization of resource names, URLs and service names.
//!
//! All functions in this crate are infallible. They take the decoded [`Config`] by reference and
//! never panic on input data. Invalid configured regexes are logged once and otherwise ignored.
//!
//! [`Config`]: spantag_config::Config

#![warn(missing_docs)]

mod host;
mod post_data;
mod query;
mod regexes;
mod uri;
mod url;

pub use self::host::*;
pub use self::post_data::*;
pub use self::query::*;
pub use self::uri::*;
pub use self::url::*;
