use once_cell::sync::Lazy;
use regex::Regex;
use spantag_pattern::LazyPattern;

/// Segment regexes that are always applied before configured ones.
pub static DEFAULT_FRAGMENT_REGEXES: Lazy<[LazyPattern; 3]> = Lazy::new(|| {
    [
        LazyPattern::new(r"^[0-9]+$"),
        LazyPattern::new(
            r"^[0-9a-fA-F]{8}-?[0-9a-fA-F]{4}-?[1-5][0-9a-fA-F]{3}-?[89abAB][0-9a-fA-F]{3}-?[0-9a-fA-F]{12}$",
        ),
        LazyPattern::new(r"^[0-9a-fA-F]{8,128}$"),
    ]
});

/// The query string of a URL: everything after the first usable `?` up to the fragment.
pub static QUERY_STRING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\?([^:?@#][^#]*)").unwrap());

/// RFC 3986 scheme followed by `://`.
pub static URL_SCHEME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-zA-Z0-9+\-.]+://").unwrap());

/// Userinfo without (`user:@`) and with (`user:pass@`) a password.
///
/// Both alternatives also match userinfo that was already sanitized to `?`.
pub static USERINFO_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        (?P<user>[a-zA-Z0-9\-._~!$&'()*+,;=%?]+:@) |
        (?P<credentials>[a-zA-Z0-9\-._~!$&'()*+,;=%?]+:[a-zA-Z0-9\-._~!$&'()*+,;=%?]+@)",
    )
    .unwrap()
});

/// Runs of characters that are not allowed in service names.
pub static SERVICE_NAME_INVALID_CHARS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9._]+").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fragment_regexes_compile() {
        for pattern in DEFAULT_FRAGMENT_REGEXES.iter() {
            assert!(pattern.compiled().is_ok(), "{}", pattern.raw());
        }
    }

    #[test]
    fn test_query_string_regex() {
        let query = |s| {
            QUERY_STRING_REGEX
                .captures(s)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str())
        };

        assert_eq!(query("/path?a=1#frag"), Some("a=1"));
        assert_eq!(query("/path?a=1?b=2"), Some("a=1?b=2"));
        assert_eq!(query("?:@host/path?a=1"), Some("a=1"));
        assert_eq!(query("/path"), None);
        assert_eq!(query("/path?#frag"), None);
    }

    #[test]
    fn test_url_scheme_regex() {
        assert!(URL_SCHEME_REGEX.is_match("http://example.com"));
        assert!(URL_SCHEME_REGEX.is_match("letter+1-2-3.CAPITAL.123://example.com"));
        assert!(!URL_SCHEME_REGEX.is_match("Http://example.com"));
        assert!(!URL_SCHEME_REGEX.is_match("h://example.com"));
        assert!(!URL_SCHEME_REGEX.is_match("example.com/http://"));
    }
}
