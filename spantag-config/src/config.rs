use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use spantag_pattern::{LazyPattern, LegacyUriNormalizer, MappingRule, parse_mapping_rules};

use crate::{ConfigKey, ConfigSource, MapSource, decode_config_map, decode_config_set, parse_bool};

/// Indicates config related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("could not read config file {}", path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration document is not valid YAML or names an unknown setting.
    #[error("could not parse yaml config")]
    Yaml(#[source] serde_yaml::Error),
    /// A setting holds a value that cannot be represented as a string.
    #[error("unsupported value for setting {0}")]
    UnsupportedValue(ConfigKey),
}

/// A decoded list of parameter names.
///
/// A list consisting of exactly the single entry `*` allows every parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowList {
    names: Vec<String>,
}

impl AllowList {
    /// The token that allows all parameters.
    pub const WILDCARD: &'static str = "*";

    /// Creates an allow list from decoded names.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Decodes a comma-separated allow list.
    pub fn parse(raw: &str) -> Self {
        Self::new(decode_config_set(raw))
    }

    /// Creates an allow list that allows every parameter.
    pub fn wildcard() -> Self {
        Self::new(vec![Self::WILDCARD.to_owned()])
    }

    /// Returns the decoded names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns `true` if nothing is allowed.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns `true` if the list is exactly the wildcard.
    pub fn is_wildcard(&self) -> bool {
        matches!(self.names.as_slice(), [name] if name == Self::WILDCARD)
    }

    /// Returns `true` if the wildcard appears anywhere in the list.
    pub fn contains_wildcard(&self) -> bool {
        self.contains(Self::WILDCARD)
    }

    /// Returns `true` if `name` is listed. Matching is exact and case-sensitive.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|allowed| allowed == name)
    }
}

/// How paths are turned into resource names.
///
/// The mode is decided once when the configuration is loaded.
#[derive(Clone, Debug, PartialEq)]
pub enum UriNormalization {
    /// The deprecated global glob mapping.
    ///
    /// Only selected when it is configured and none of the modern settings are.
    Legacy(LegacyUriNormalizer),
    /// Direction-specific mappings followed by segment regexes.
    Modern {
        /// Configured segment regexes, applied after the default ones.
        fragment_regexes: Vec<LazyPattern>,
        /// Mappings for incoming requests.
        incoming: Vec<MappingRule>,
        /// Mappings for outgoing requests.
        outgoing: Vec<MappingRule>,
    },
}

impl Default for UriNormalization {
    fn default() -> Self {
        Self::Modern {
            fragment_regexes: Vec::new(),
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }
}

impl UriNormalization {
    fn from_source(source: &impl ConfigSource) -> Self {
        let fragment_regexes = decode_config_set(&source.get(ConfigKey::ResourceUriFragmentRegex));
        let incoming = decode_config_set(&source.get(ConfigKey::ResourceUriMappingIncoming));
        let outgoing = decode_config_set(&source.get(ConfigKey::ResourceUriMappingOutgoing));
        let legacy = source.get(ConfigKey::ResourceUriMapping);

        let modern_configured =
            !fragment_regexes.is_empty() || !incoming.is_empty() || !outgoing.is_empty();

        if !modern_configured && !legacy.trim().is_empty() {
            spantag_log::debug!(mapping = %legacy, "using legacy uri mapping");
            return Self::Legacy(LegacyUriNormalizer::parse(&legacy));
        }

        Self::Modern {
            fragment_regexes: fragment_regexes
                .iter()
                .map(|raw| LazyPattern::for_segment(raw))
                .collect(),
            incoming: parse_mapping_rules(&incoming),
            outgoing: parse_mapping_rules(&outgoing),
        }
    }
}

/// Settings for `peer.service` tagging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeerServiceConfig {
    /// Whether `peer.service` is derived from precursor tags.
    pub enabled: bool,
    /// Exact-match renames applied to the derived value.
    pub mapping: BTreeMap<String, String>,
}

impl PeerServiceConfig {
    /// Returns the configured rename for `service`, ignoring empty targets.
    pub fn remap(&self, service: &str) -> Option<&str> {
        self.mapping
            .get(service)
            .map(String::as_str)
            .filter(|mapped| !mapped.is_empty())
    }
}

/// Decoded settings, resolved once and passed by reference to all operations.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    uri_normalization: UriNormalization,
    resource_query_allowed: AllowList,
    http_url_query_allowed: AllowList,
    post_data_allowed: AllowList,
    obfuscation: Option<LazyPattern>,
    peer_service: PeerServiceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_source(&MapSource::new())
    }
}

impl Config {
    /// Resolves and decodes all settings from `source`.
    pub fn from_source(source: &impl ConfigSource) -> Self {
        let obfuscation = source.get(ConfigKey::ObfuscationQueryStringRegexp);
        let obfuscation = (!obfuscation.is_empty()).then(|| LazyPattern::new(obfuscation));

        Self {
            uri_normalization: UriNormalization::from_source(source),
            resource_query_allowed: AllowList::parse(
                &source.get(ConfigKey::ResourceUriQueryParamAllowed),
            ),
            http_url_query_allowed: AllowList::parse(
                &source.get(ConfigKey::HttpUrlQueryParamAllowed),
            ),
            post_data_allowed: AllowList::parse(&source.get(ConfigKey::HttpPostDataParamAllowed)),
            obfuscation,
            peer_service: PeerServiceConfig {
                enabled: read_bool(source, ConfigKey::PeerServiceDefaultsEnabled),
                mapping: decode_config_map(&source.get(ConfigKey::PeerServiceMapping)),
            },
        }
    }

    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_source(&crate::EnvSource)
    }

    /// Parses settings from a YAML document, with environment variables taking precedence.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let source = MapSource::from_yaml_str(yaml)?.with_env_overrides();
        Ok(Self::from_source(&source))
    }

    /// Reads settings from a YAML file, with environment variables taking precedence.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = MapSource::from_path(path)?.with_env_overrides();
        Ok(Self::from_source(&source))
    }

    /// Returns the path normalization mode.
    pub fn uri_normalization(&self) -> &UriNormalization {
        &self.uri_normalization
    }

    /// Query parameters kept in resource names.
    pub fn resource_query_allowed(&self) -> &AllowList {
        &self.resource_query_allowed
    }

    /// Query parameters kept in URL tags.
    pub fn http_url_query_allowed(&self) -> &AllowList {
        &self.http_url_query_allowed
    }

    /// POST body fields kept unredacted.
    pub fn post_data_allowed(&self) -> &AllowList {
        &self.post_data_allowed
    }

    /// Returns the allow list stored under `key`.
    ///
    /// Returns `None` if `key` is not an allow-list setting.
    pub fn allow_list(&self, key: ConfigKey) -> Option<&AllowList> {
        match key {
            ConfigKey::ResourceUriQueryParamAllowed => Some(&self.resource_query_allowed),
            ConfigKey::HttpUrlQueryParamAllowed => Some(&self.http_url_query_allowed),
            ConfigKey::HttpPostDataParamAllowed => Some(&self.post_data_allowed),
            _ => None,
        }
    }

    /// The pattern redacting secrets from wildcard-allowed content, if configured.
    pub fn obfuscation(&self) -> Option<&LazyPattern> {
        self.obfuscation.as_ref()
    }

    /// Settings for `peer.service` tagging.
    pub fn peer_service(&self) -> &PeerServiceConfig {
        &self.peer_service
    }
}

fn read_bool(source: &impl ConfigSource, key: ConfigKey) -> bool {
    let raw = source.get(key);
    if let Some(value) = parse_bool(&raw) {
        return value;
    }

    let default = parse_bool(key.default_value()).unwrap_or_default();
    spantag_log::warn!(
        setting = %key,
        value = %raw,
        default,
        "invalid boolean setting, using default"
    );
    default
}
