/// The default value of [`ConfigKey::ObfuscationQueryStringRegexp`].
///
/// Matches common secret-bearing query parameters, bearer tokens, GitHub tokens, JWTs, private
/// keys and SSH keys, both in plain and percent-encoded form.
pub const DEFAULT_OBFUSCATION_QUERY_STRING_REGEXP: &str = concat!(
    r#"(?i)(?:p(?:ass)?w(?:or)?d|pass(?:_?phrase)?|secret|(?:api_?|private_?|public_?|access_?|secret_?)key(?:_?id)?|token|consumer_?(?:id|key|secret)|sign(?:ed|ature)?|auth(?:entication|orization)?)"#,
    r#"(?:(?:\s|%20)*(?:=|%3D)[^&]+|(?:"|%22)(?:\s|%20)*(?::|%3A)(?:\s|%20)*(?:"|%22)(?:%2[^2]|%[^2]|[^"%])+(?:"|%22))"#,
    r#"|bearer(?:\s|%20)+[a-z0-9\._\-]"#,
    r#"|token(?::|%3A)[a-z0-9]{13}"#,
    r#"|gh[opsu]_[0-9a-zA-Z]{36}"#,
    r#"|ey[I-L](?:[\w=-]|%3D)+\.ey[I-L](?:[\w=-]|%3D)+(?:\.(?:[\w.+/=-]|%3D|%2F|%2B)+)?"#,
    r#"|[\-]{5}BEGIN(?:[a-z\s]|%20)+PRIVATE(?:\s|%20)KEY[\-]{5}[^\-]+[\-]{5}END(?:[a-z\s]|%20)+PRIVATE(?:\s|%20)KEY"#,
    r#"|ssh-rsa(?:\s|%20)*(?:[a-z0-9/\.+]|%2F|%5C|%2B){100,}"#,
);

/// Error returned when parsing an unknown [`ConfigKey`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown setting")]
pub struct UnknownConfigKey;

/// A setting consumed by the span tagging libraries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigKey {
    /// Comma-separated regexes replacing matching path segments with `?`.
    ResourceUriFragmentRegex,
    /// Comma-separated path mappings for incoming requests.
    ResourceUriMappingIncoming,
    /// Comma-separated path mappings for outgoing requests.
    ResourceUriMappingOutgoing,
    /// Deprecated comma-separated global path mapping.
    ///
    /// Only honored while none of the other URI settings are configured.
    ResourceUriMapping,
    /// Query parameters kept in resource names.
    ResourceUriQueryParamAllowed,
    /// Query parameters kept in URL tags.
    HttpUrlQueryParamAllowed,
    /// POST body fields kept unredacted.
    HttpPostDataParamAllowed,
    /// Regex whose matches are redacted from wildcard-allowed query strings.
    ObfuscationQueryStringRegexp,
    /// Enables `peer.service` tagging.
    PeerServiceDefaultsEnabled,
    /// Comma-separated `from:to` table for renaming `peer.service` values.
    PeerServiceMapping,
}

spantag_common::derive_fromstr_and_display!(ConfigKey, UnknownConfigKey, {
    ConfigKey::ResourceUriFragmentRegex => "resource_uri_fragment_regex",
    ConfigKey::ResourceUriMappingIncoming => "resource_uri_mapping_incoming",
    ConfigKey::ResourceUriMappingOutgoing => "resource_uri_mapping_outgoing",
    ConfigKey::ResourceUriMapping => "resource_uri_mapping",
    ConfigKey::ResourceUriQueryParamAllowed => "resource_uri_query_param_allowed",
    ConfigKey::HttpUrlQueryParamAllowed => "http_url_query_param_allowed",
    ConfigKey::HttpPostDataParamAllowed => "http_post_data_param_allowed",
    ConfigKey::ObfuscationQueryStringRegexp => "obfuscation_query_string_regexp",
    ConfigKey::PeerServiceDefaultsEnabled => "peer_service_defaults_enabled",
    ConfigKey::PeerServiceMapping => "peer_service_mapping",
});

spantag_common::impl_str_serde!(ConfigKey, "a span tagging setting name");

impl ConfigKey {
    /// All settings, in declaration order.
    pub const ALL: [ConfigKey; 10] = [
        ConfigKey::ResourceUriFragmentRegex,
        ConfigKey::ResourceUriMappingIncoming,
        ConfigKey::ResourceUriMappingOutgoing,
        ConfigKey::ResourceUriMapping,
        ConfigKey::ResourceUriQueryParamAllowed,
        ConfigKey::HttpUrlQueryParamAllowed,
        ConfigKey::HttpPostDataParamAllowed,
        ConfigKey::ObfuscationQueryStringRegexp,
        ConfigKey::PeerServiceDefaultsEnabled,
        ConfigKey::PeerServiceMapping,
    ];

    /// Returns the environment variable holding this setting.
    pub fn env_name(&self) -> &'static str {
        match self {
            Self::ResourceUriFragmentRegex => "DD_TRACE_RESOURCE_URI_FRAGMENT_REGEX",
            Self::ResourceUriMappingIncoming => "DD_TRACE_RESOURCE_URI_MAPPING_INCOMING",
            Self::ResourceUriMappingOutgoing => "DD_TRACE_RESOURCE_URI_MAPPING_OUTGOING",
            Self::ResourceUriMapping => "DD_TRACE_RESOURCE_URI_MAPPING",
            Self::ResourceUriQueryParamAllowed => "DD_TRACE_RESOURCE_URI_QUERY_PARAM_ALLOWED",
            Self::HttpUrlQueryParamAllowed => "DD_TRACE_HTTP_URL_QUERY_PARAM_ALLOWED",
            Self::HttpPostDataParamAllowed => "DD_TRACE_HTTP_POST_DATA_PARAM_ALLOWED",
            Self::ObfuscationQueryStringRegexp => "DD_TRACE_OBFUSCATION_QUERY_STRING_REGEXP",
            Self::PeerServiceDefaultsEnabled => "DD_TRACE_PEER_SERVICE_DEFAULTS_ENABLED",
            Self::PeerServiceMapping => "DD_TRACE_PEER_SERVICE_MAPPING",
        }
    }

    /// Returns the raw value used when the setting is not configured.
    pub fn default_value(&self) -> &'static str {
        match self {
            Self::HttpUrlQueryParamAllowed => "*",
            Self::ObfuscationQueryStringRegexp => DEFAULT_OBFUSCATION_QUERY_STRING_REGEXP,
            Self::PeerServiceDefaultsEnabled => "false",
            _ => "",
        }
    }
}
