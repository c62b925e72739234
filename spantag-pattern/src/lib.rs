//! Patterns used to rewrite URI paths and redact values.
//!
//! All patterns in this crate originate from user configuration. They are compiled lazily on
//! first use, and a pattern that fails to compile never matches instead of raising an error. This
//! keeps normalization safe to call from instrumentation hot paths, where a failure would affect
//! the instrumented application.
//!
//! - [`LazyPattern`] wraps a raw regular expression.
//! - [`MappingRule`] is a path glob where `*` matches a single path segment.
//! - [`LegacyMappingRule`] is a path glob from the deprecated global mapping setting.

#![warn(missing_docs)]

mod lazy;
mod legacy;
mod mapping;

pub use self::lazy::*;
pub use self::legacy::*;
pub use self::mapping::*;
