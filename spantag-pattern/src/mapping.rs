use std::borrow::Cow;

use crate::LazyPattern;

/// Matches one path segment, stopping at the query string and fragment.
const SEGMENT_WILDCARD: &str = "[^/?#]+";

/// A path mapping such as `users/*/orders/*`.
///
/// Every `*` matches a single non-empty path segment (no `/`, `?` or `#`) and is replaced with
/// `?`. All other characters match literally and case-sensitively. The mapping is implicitly
/// anchored to a leading `/` and applies to every occurrence in a path:
///
/// ```
/// use spantag_pattern::MappingRule;
///
/// let rule = MappingRule::parse("path/*").unwrap();
/// assert_eq!(rule.apply("/int/1/path/one/path/two"), "/int/1/path/?/path/?");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MappingRule {
    pattern: LazyPattern,
    replacement: String,
}

impl MappingRule {
    /// Parses a mapping from configuration.
    ///
    /// Returns `None` for mappings that are empty after trimming whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let mapping = raw.trim();
        if mapping.is_empty() {
            return None;
        }

        let regex = mapping
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(SEGMENT_WILDCARD);

        Some(Self {
            pattern: LazyPattern::new(format!("/{regex}")),
            replacement: format!("/{}", mapping.replace('*', "?")),
        })
    }

    /// Returns the string this mapping substitutes for each match.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Rewrites every occurrence of this mapping in `path`.
    pub fn apply<'a>(&self, path: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(path, &self.replacement)
    }
}

/// Parses a list of mappings, skipping blank entries.
pub fn parse_mapping_rules<I, S>(raw: I) -> Vec<MappingRule>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|mapping| MappingRule::parse(mapping.as_ref()))
        .collect()
}
