use std::collections::BTreeMap;

/// Decodes a comma-separated setting into an ordered list of values.
///
/// Each value is trimmed of surrounding whitespace. An empty setting yields an empty list, while
/// empty fragments within a non-empty setting are kept as they are.
///
/// ```
/// use spantag_config::decode_config_set;
///
/// assert_eq!(decode_config_set(" a, b ,c"), ["a", "b", "c"]);
/// assert_eq!(decode_config_set("a,,b"), ["a", "", "b"]);
/// assert!(decode_config_set("").is_empty());
/// ```
pub fn decode_config_set(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split(',').map(|value| value.trim().to_owned()).collect()
}

/// Decodes a comma-separated `key:value` table.
///
/// Keys and values are trimmed. Entries without a `:` or with an empty key are skipped. Later
/// entries override earlier ones.
///
/// ```
/// use spantag_config::decode_config_map;
///
/// let map = decode_config_map("db-1:orders-db, cache : sessions,broken");
/// assert_eq!(map.get("db-1").map(String::as_str), Some("orders-db"));
/// assert_eq!(map.get("cache").map(String::as_str), Some("sessions"));
/// assert_eq!(map.len(), 2);
/// ```
pub fn decode_config_map(raw: &str) -> BTreeMap<String, String> {
    raw.split(',')
        .filter_map(|entry| entry.split_once(':'))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}

/// Parses a boolean setting.
///
/// Accepts `1`, `true`, `yes` and `on` as well as `0`, `false`, `no` and `off`, ignoring case and
/// surrounding whitespace. Returns `None` for any other value.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
