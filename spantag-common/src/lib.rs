//! Common functionality for the span tagging libraries.
#![warn(missing_docs)]

#[macro_use]
mod macros;
