use itertools::Itertools;
use spantag_config::{AllowList, Config, ConfigKey};
use spantag_pattern::LazyPattern;

use crate::regexes::QUERY_STRING_REGEX;

/// Placeholder for redacted secrets.
pub const REDACTED: &str = "<redacted>";

/// Extracts the query string of `input` and filters it through the allow list stored at `key`.
///
/// Returns either an empty string or a query string starting with `?`:
///
///  - Without a query string, or if the allow list is empty, nothing is kept.
///  - If the allow list is exactly `*`, the whole query string is kept and secrets matching the
///    configured obfuscation regex are replaced with `<redacted>`.
///  - Otherwise, only `&`-separated parameters whose name is listed are kept.
///
/// A `key` that does not name an allow-list setting keeps nothing.
///
/// ```
/// use spantag_config::{Config, ConfigKey, MapSource};
/// use spantag_normalization::clean_query_string;
///
/// let source = MapSource::new().with(ConfigKey::ResourceUriQueryParamAllowed, "id");
/// let config = Config::from_source(&source);
///
/// let key = ConfigKey::ResourceUriQueryParamAllowed;
/// assert_eq!(clean_query_string("/users?id=1&token=2#top", key, &config), "?id=1");
/// assert_eq!(clean_query_string("/users?token=2", key, &config), "");
/// ```
pub fn clean_query_string(input: &str, key: ConfigKey, config: &Config) -> String {
    let Some(allow_list) = config.allow_list(key) else {
        return String::new();
    };

    filter_query_string(extract_query_string(input), allow_list, config.obfuscation())
}

/// Filters a raw server query string, without the leading `?`, through the URL allow list.
///
/// ```
/// use spantag_config::Config;
/// use spantag_normalization::sanitized_query_string;
///
/// let config = Config::default();
/// assert_eq!(sanitized_query_string("page=2", &config), "?page=2");
/// assert_eq!(sanitized_query_string("", &config), "");
/// ```
pub fn sanitized_query_string(raw: &str, config: &Config) -> String {
    if raw.is_empty() {
        return String::new();
    }

    clean_query_string(&format!("?{raw}"), ConfigKey::HttpUrlQueryParamAllowed, config)
}

/// Returns the query string of `input` without the leading `?` and the fragment.
fn extract_query_string(input: &str) -> &str {
    QUERY_STRING_REGEX
        .captures(input)
        .and_then(|captures| captures.get(1))
        .map_or("", |query| query.as_str())
}

fn filter_query_string(
    query: &str,
    allow_list: &AllowList,
    obfuscation: Option<&LazyPattern>,
) -> String {
    if query.is_empty() || allow_list.is_empty() {
        return String::new();
    }

    if allow_list.is_wildcard() {
        let query = match obfuscation {
            Some(pattern) => pattern.replace_all(query, REDACTED),
            None => query.into(),
        };
        return format!("?{query}");
    }

    let mut preserved = query
        .split('&')
        .filter(|part| {
            let name = part.split_once('=').map_or(*part, |(name, _)| name);
            allow_list.contains(name)
        })
        .peekable();

    if preserved.peek().is_none() {
        return String::new();
    }

    format!("?{}", preserved.join("&"))
}
