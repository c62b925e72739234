use serde::{Deserialize, Serialize};

use crate::{Getter, SpanLike, TagSink, Tags};

/// An in-memory span with an optional operation name and string tags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanData {
    /// The operation name, if one was assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The span tags.
    #[serde(default)]
    pub tags: Tags,
}

impl SpanData {
    /// Creates an unnamed span with the given tags.
    pub fn new(tags: impl Into<Tags>) -> Self {
        Self {
            name: None,
            tags: tags.into(),
        }
    }

    /// Creates a named span with the given tags.
    pub fn named(name: impl Into<String>, tags: impl Into<Tags>) -> Self {
        Self {
            name: Some(name.into()),
            tags: tags.into(),
        }
    }
}

impl Getter for SpanData {
    fn get_tag(&self, name: &str) -> Option<&str> {
        self.tags.get_tag(name)
    }
}

impl TagSink for SpanData {
    fn set_tag(&mut self, name: &str, value: String) {
        self.tags.set_tag(name, value)
    }
}

impl SpanLike for SpanData {
    fn operation_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn set_operation_name(&mut self, name: String) {
        self.name = Some(name);
    }
}

impl<T: SpanLike + ?Sized> SpanLike for &mut T {
    fn operation_name(&self) -> Option<&str> {
        (**self).operation_name()
    }

    fn set_operation_name(&mut self, name: String) {
        (**self).set_operation_name(name)
    }
}
