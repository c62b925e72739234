use crate::regexes::SERVICE_NAME_INVALID_CHARS_REGEX;

/// Turns a host name, optionally with a scheme, or a unix domain socket path into a string
/// that can be used in service names.
///
/// ```
/// use spantag_normalization::normalize_host_or_uds_as_service;
///
/// assert_eq!(normalize_host_or_uds_as_service(Some("http://127.0.0.1/")), "127.0.0.1");
/// assert_eq!(normalize_host_or_uds_as_service(Some("/tmp/redis.sock")), "tmp-redis.sock");
/// assert_eq!(normalize_host_or_uds_as_service(None), "");
/// ```
pub fn normalize_host_or_uds_as_service(host_or_uds: Option<&str>) -> String {
    let Some(host_or_uds) = host_or_uds else {
        return String::new();
    };

    let without_scheme = host_or_uds.rsplit("://").next().unwrap_or(host_or_uds);
    normalize_service_chars(without_scheme)
}

/// Removes spaces and collapses runs of characters other than `[a-zA-Z0-9._]` into `-`.
pub(crate) fn normalize_service_chars(value: &str) -> String {
    let without_spaces = value.replace(' ', "");
    SERVICE_NAME_INVALID_CHARS_REGEX
        .replace_all(&without_spaces, "-")
        .trim_matches(|c| c == '-' || c == ' ')
        .to_owned()
}
