use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read access to the string tags of a span.
///
/// ```
/// use std::collections::BTreeMap;
/// use spantag_protocol::Getter;
///
/// let tags = BTreeMap::from([("db.system".to_owned(), "mysql".to_owned())]);
/// assert_eq!(tags.get_tag("db.system"), Some("mysql"));
/// assert_eq!(tags.get_tag("db.name"), None);
/// ```
pub trait Getter {
    /// Returns the value of the tag called `name`, if set.
    fn get_tag(&self, name: &str) -> Option<&str>;

    /// Returns the value of the tag called `name` if it is set and not empty.
    fn get_non_empty_tag(&self, name: &str) -> Option<&str> {
        self.get_tag(name).filter(|value| !value.is_empty())
    }

    /// Returns `true` if the tag called `name` is set, even if it is empty.
    fn has_tag(&self, name: &str) -> bool {
        self.get_tag(name).is_some()
    }
}

/// Write access to the string tags of a span.
pub trait TagSink: Getter {
    /// Sets the tag called `name`, replacing any previous value.
    fn set_tag(&mut self, name: &str, value: String);
}

/// A span whose operation name can be read and assigned.
pub trait SpanLike: TagSink {
    /// Returns the operation name, if one was assigned.
    fn operation_name(&self) -> Option<&str>;

    /// Assigns the operation name.
    fn set_operation_name(&mut self, name: String);
}

impl<T: Getter + ?Sized> Getter for &T {
    fn get_tag(&self, name: &str) -> Option<&str> {
        (**self).get_tag(name)
    }
}

impl<T: Getter + ?Sized> Getter for &mut T {
    fn get_tag(&self, name: &str) -> Option<&str> {
        (**self).get_tag(name)
    }
}

impl<T: TagSink + ?Sized> TagSink for &mut T {
    fn set_tag(&mut self, name: &str, value: String) {
        (**self).set_tag(name, value)
    }
}

impl Getter for BTreeMap<String, String> {
    fn get_tag(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl TagSink for BTreeMap<String, String> {
    fn set_tag(&mut self, name: &str, value: String) {
        self.insert(name.to_owned(), value);
    }
}

impl<S: BuildHasher> Getter for HashMap<String, String, S> {
    fn get_tag(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<S: BuildHasher> TagSink for HashMap<String, String, S> {
    fn set_tag(&mut self, name: &str, value: String) {
        self.insert(name.to_owned(), value);
    }
}

impl Getter for [(&str, &str)] {
    fn get_tag(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

impl<const N: usize> Getter for [(&str, &str); N] {
    fn get_tag(&self, name: &str) -> Option<&str> {
        self.as_slice().get_tag(name)
    }
}
