use std::borrow::Cow;

use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};

const COMPILED_PATTERN_MAX_SIZE: usize = 1 << 20;

/// An error returned when a configured pattern cannot be used.
#[derive(Clone, Debug, thiserror::Error)]
pub enum PatternError {
    /// The pattern is not a valid regular expression.
    #[error("could not parse pattern")]
    Regex(#[source] regex::Error),
}

/// Wrapper for the regex and the raw pattern string.
///
/// The regex will be compiled only when it used once, and the compiled version will be reused on
/// consecutive calls. Compilation failures are logged once and turn every match operation into
/// a no-op.
#[derive(Debug, Clone)]
pub struct LazyPattern {
    raw: Cow<'static, str>,
    pattern: OnceCell<Result<Regex, PatternError>>,
}

impl PartialEq for LazyPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl LazyPattern {
    /// Create a new [`LazyPattern`] from a raw string.
    pub fn new<S>(raw: S) -> Self
    where
        Cow<'static, str>: From<S>,
    {
        Self {
            raw: raw.into(),
            pattern: OnceCell::new(),
        }
    }

    /// Creates a pattern that is applied to single path segments.
    ///
    /// Leading and trailing slashes and spaces are optional in configuration, since `/` is also
    /// the path separator. They are stripped before compilation.
    pub fn for_segment(raw: &str) -> Self {
        Self::new(raw.trim_matches(|c| c == '/' || c == ' ').to_owned())
    }

    /// Returns the raw pattern string.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Compiles the regex from the internal raw string.
    pub fn compiled(&self) -> Result<&Regex, &PatternError> {
        self.pattern
            .get_or_init(|| {
                let regex_result = RegexBuilder::new(&self.raw)
                    .size_limit(COMPILED_PATTERN_MAX_SIZE)
                    .build()
                    .map_err(PatternError::Regex);

                if let Err(ref error) = regex_result {
                    spantag_log::error!(
                        error = error as &dyn std::error::Error,
                        pattern = %self.raw,
                        "unable to compile pattern into regex"
                    );
                }
                regex_result
            })
            .as_ref()
    }

    /// Returns `true` if the pattern compiles and matches anywhere in `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.compiled().is_ok_and(|regex| regex.is_match(haystack))
    }

    /// Replaces all matches in `haystack` with the literal `replacement`.
    ///
    /// Returns the input unchanged if the pattern does not compile.
    pub fn replace_all<'h>(&self, haystack: &'h str, replacement: &str) -> Cow<'h, str> {
        match self.compiled() {
            Ok(regex) => regex.replace_all(haystack, regex::NoExpand(replacement)),
            Err(_) => Cow::Borrowed(haystack),
        }
    }
}

impl From<&'static str> for LazyPattern {
    fn from(pattern: &'static str) -> LazyPattern {
        LazyPattern::new(pattern)
    }
}

impl From<String> for LazyPattern {
    fn from(pattern: String) -> LazyPattern {
        LazyPattern::new(pattern)
    }
}
