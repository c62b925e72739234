use std::collections::BTreeMap;

use serde_json::Value;
use spantag_config::{AllowList, Config};
use spantag_pattern::LazyPattern;

use crate::REDACTED;
use crate::host::normalize_service_chars;

/// Flattens a request body into dotted field names and redacts fields that are not allowed.
///
/// Nested objects and arrays are flattened into names like `user.address.0`. Every name component
/// is normalized like a service name. A leaf value is:
///
///  - kept if its dotted name is listed in the POST data allow list,
///  - otherwise, if the allow list contains `*`, redacted only if `name=value` matches the
///    obfuscation regex, or always if no obfuscation regex is configured,
///  - otherwise redacted.
///
/// ```
/// use serde_json::json;
/// use spantag_config::{Config, ConfigKey, MapSource};
/// use spantag_normalization::sanitize_post_fields;
///
/// let source = MapSource::new().with(ConfigKey::HttpPostDataParamAllowed, "user.name");
/// let config = Config::from_source(&source);
///
/// let fields = sanitize_post_fields(&json!({"user": {"name": "bob", "pin": 1234}}), &config);
/// assert_eq!(fields["user.name"], "bob");
/// assert_eq!(fields["user.pin"], "<redacted>");
/// ```
pub fn sanitize_post_fields(fields: &Value, config: &Config) -> BTreeMap<String, String> {
    let mut filtered = BTreeMap::new();
    PostFieldFilter {
        allow_list: config.post_data_allowed(),
        obfuscation: config.obfuscation(),
    }
    .collect(String::new(), fields, &mut filtered);
    filtered
}

struct PostFieldFilter<'a> {
    allow_list: &'a AllowList,
    obfuscation: Option<&'a LazyPattern>,
}

impl PostFieldFilter<'_> {
    fn collect(&self, name: String, value: &Value, filtered: &mut BTreeMap<String, String>) {
        match value {
            Value::Object(object) => {
                for (key, value) in object {
                    self.collect(child_name(&name, key), value, filtered);
                }
            }
            Value::Array(array) => {
                for (index, value) in array.iter().enumerate() {
                    self.collect(child_name(&name, &index.to_string()), value, filtered);
                }
            }
            leaf => {
                let value = self.filter_leaf(&name, leaf_to_string(leaf));
                filtered.insert(name, value);
            }
        }
    }

    fn filter_leaf(&self, name: &str, value: String) -> String {
        if self.allow_list.contains(name) {
            return value;
        }

        if !self.allow_list.contains_wildcard() {
            return REDACTED.to_owned();
        }

        match self.obfuscation {
            Some(pattern) if !pattern.is_match(&format!("{name}={value}")) => value,
            _ => REDACTED.to_owned(),
        }
    }
}

fn child_name(parent: &str, key: &str) -> String {
    let key = normalize_service_chars(key);
    if parent.is_empty() {
        key
    } else {
        format!("{parent}.{key}")
    }
}

fn leaf_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use spantag_config::{ConfigKey, MapSource};

    use super::*;

    fn config(allowed: &str, obfuscation: &str) -> Config {
        Config::from_source(
            &MapSource::new()
                .with(ConfigKey::HttpPostDataParamAllowed, allowed)
                .with(ConfigKey::ObfuscationQueryStringRegexp, obfuscation),
        )
    }

    fn body() -> Value {
        json!({
            "user": {
                "name": "bob",
                "password": "hunter2",
                "tags": ["a", "b"],
            },
            "my-key!": 42,
            "remember": true,
            "note": null,
            "empty": {},
        })
    }

    #[test]
    fn test_nothing_allowed() {
        insta::assert_debug_snapshot!(sanitize_post_fields(&body(), &config("", "")), @r#"
        {
            "my-key": "<redacted>",
            "note": "<redacted>",
            "remember": "<redacted>",
            "user.name": "<redacted>",
            "user.password": "<redacted>",
            "user.tags.0": "<redacted>",
            "user.tags.1": "<redacted>",
        }
        "#);
    }

    #[test]
    fn test_explicitly_allowed() {
        let config = config("user.name, user.tags.1,my-key", "");
        insta::assert_debug_snapshot!(sanitize_post_fields(&body(), &config), @r#"
        {
            "my-key": "42",
            "note": "<redacted>",
            "remember": "<redacted>",
            "user.name": "bob",
            "user.password": "<redacted>",
            "user.tags.0": "<redacted>",
            "user.tags.1": "b",
        }
        "#);
    }

    #[test]
    fn test_wildcard_obfuscates() {
        let config = config("*", "password=.*");
        insta::assert_debug_snapshot!(sanitize_post_fields(&body(), &config), @r#"
        {
            "my-key": "42",
            "note": "",
            "remember": "true",
            "user.name": "bob",
            "user.password": "<redacted>",
            "user.tags.0": "a",
            "user.tags.1": "b",
        }
        "#);
    }

    #[test]
    fn test_wildcard_with_default_obfuscation() {
        let config = Config::from_source(
            &MapSource::new().with(ConfigKey::HttpPostDataParamAllowed, "*"),
        );
        let fields = sanitize_post_fields(&json!({"api_key": "abc", "page": 2}), &config);

        assert_eq!(fields["api_key"], "<redacted>");
        assert_eq!(fields["page"], "2");
    }

    #[test]
    fn test_wildcard_without_obfuscation_redacts() {
        let config = config("*", "");
        let fields = sanitize_post_fields(&json!({"password": "hunter2", "page": 2}), &config);

        assert_eq!(fields["password"], "<redacted>");
        assert_eq!(fields["page"], "<redacted>");
    }

    #[test]
    fn test_wildcard_explicit_entry_without_obfuscation() {
        let config = config("*,page", "");
        let fields = sanitize_post_fields(&json!({"password": "hunter2", "page": 2}), &config);

        assert_eq!(fields["password"], "<redacted>");
        assert_eq!(fields["page"], "2");
    }

    #[test]
    fn test_scalar_body() {
        let fields = sanitize_post_fields(&json!("raw"), &config("", ""));
        assert_eq!(fields.get(""), Some(&"<redacted>".to_owned()));
    }
}
