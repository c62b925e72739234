//! Access to span tags.
//!
//! The span tagging libraries never own spans. They read tags through [`Getter`], write tags
//! through [`TagSink`] and rename spans through [`SpanLike`]. Tracers implement these traits for
//! their own span types.
//!
//! [`Tags`] and [`SpanData`] are simple in-memory implementations, used in tests and by callers
//! that collect tags before handing them to a tracer.

#![warn(missing_docs)]

mod span;
mod tags;
mod traits;

pub use self::span::*;
pub use self::tags::*;
pub use self::traits::*;
