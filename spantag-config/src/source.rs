use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::{ConfigError, ConfigKey};

/// Resolves raw setting values.
///
/// Sources never fail. A setting that is not configured resolves to
/// [`ConfigKey::default_value`].
pub trait ConfigSource {
    /// Returns the raw value of a setting.
    fn get(&self, key: ConfigKey) -> String;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn get(&self, key: ConfigKey) -> String {
        (**self).get(key)
    }
}

/// Reads settings from the process environment.
///
/// Each setting is read from the variable named by [`ConfigKey::env_name`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvSource;

impl EnvSource {
    /// Returns the value of the setting's environment variable, if set and valid unicode.
    pub fn lookup(key: ConfigKey) -> Option<String> {
        env::var(key.env_name()).ok()
    }
}

impl ConfigSource for EnvSource {
    fn get(&self, key: ConfigKey) -> String {
        Self::lookup(key).unwrap_or_else(|| key.default_value().to_owned())
    }
}

/// Settings held in memory.
///
/// This is used for configuration files and in tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapSource {
    values: BTreeMap<ConfigKey, String>,
}

impl MapSource {
    /// Creates an empty source in which all settings have their default value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a raw setting value.
    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    /// Sets a raw setting value and returns the source.
    pub fn with(mut self, key: ConfigKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Removes a setting, restoring its default value.
    pub fn unset(&mut self, key: ConfigKey) {
        self.values.remove(&key);
    }

    /// Overrides settings with values from environment variables, if they are set.
    pub fn with_env_overrides(mut self) -> Self {
        for key in ConfigKey::ALL {
            if let Some(value) = EnvSource::lookup(key) {
                self.set(key, value);
            }
        }
        self
    }

    /// Parses settings from a YAML document.
    ///
    /// The document is a mapping from setting names to values. Strings, booleans and numbers are
    /// used verbatim, sequences are joined with `,` and mappings are joined as `key:value` pairs.
    ///
    /// ```
    /// use spantag_config::{ConfigKey, ConfigSource, MapSource};
    ///
    /// let source = MapSource::from_yaml_str(r#"
    /// resource_uri_mapping_incoming:
    ///   - users/*
    ///   - orders/*
    /// peer_service_defaults_enabled: true
    /// "#).unwrap();
    ///
    /// assert_eq!(source.get(ConfigKey::ResourceUriMappingIncoming), "users/*,orders/*");
    /// assert_eq!(source.get(ConfigKey::PeerServiceDefaultsEnabled), "true");
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }

        let raw: Option<BTreeMap<ConfigKey, Value>> =
            serde_yaml::from_str(yaml).map_err(ConfigError::Yaml)?;

        let mut source = Self::new();
        for (key, value) in raw.unwrap_or_default() {
            let value = flatten_value(&value).ok_or(ConfigError::UnsupportedValue(key))?;
            source.set(key, value);
        }

        Ok(source)
    }

    /// Reads settings from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|error| ConfigError::Io {
            path: path.to_owned(),
            source: error,
        })?;
        Self::from_yaml_str(&yaml)
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: ConfigKey) -> String {
        match self.values.get(&key) {
            Some(value) => value.clone(),
            None => key.default_value().to_owned(),
        }
    }
}

fn flatten_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn flatten_value(value: &Value) -> Option<String> {
    match value {
        Value::Sequence(items) => {
            let items = items.iter().map(flatten_scalar).collect::<Option<Vec<_>>>()?;
            Some(items.join(","))
        }
        Value::Mapping(entries) => {
            let entries = entries
                .iter()
                .map(|(k, v)| Some(format!("{}:{}", flatten_scalar(k)?, flatten_scalar(v)?)))
                .collect::<Option<Vec<_>>>()?;
            Some(entries.join(","))
        }
        Value::Tagged(tagged) => flatten_value(&tagged.value),
        scalar => flatten_scalar(scalar),
    }
}
