//! Conventions for span tags.
//!
//! This crate names the tags the span tagging libraries read and write, and classifies spans into
//! a [`Convention`] based on their `span.kind` and the semantic tags set on them. Each convention
//! derives a default operation name for spans that were not named explicitly:
//!
//! ```
//! use spantag_conventions::{Convention, classify, default_operation_name};
//!
//! let tags = [("span.kind", "client"), ("db.system", "mysql")];
//! let convention = classify(&tags);
//!
//! assert_eq!(convention, Convention::Database);
//! assert_eq!(default_operation_name(convention, &tags), "mysql.query");
//! ```

#![warn(missing_docs)]

mod consts;
mod convention;
mod kind;

pub use self::consts::*;
pub use self::convention::*;
pub use self::kind::*;
