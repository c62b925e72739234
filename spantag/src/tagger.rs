use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use spantag_config::{Config, ConfigError};
use spantag_conventions::Convention;
use spantag_normalization::Direction;
use spantag_protocol::{SpanLike, TagSink};
use spantag_spans::PeerServiceTagger;

/// Tags spans using settings that were decoded once.
///
/// The tagger is immutable and can be shared between threads.
#[derive(Clone, Debug, Default)]
pub struct SpanTagger {
    config: Config,
}

impl SpanTagger {
    /// Creates a tagger from decoded settings.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a tagger with settings from the process environment.
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    /// Creates a tagger with settings from a YAML file, overridden by the process environment.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Config::from_path(path).map(Self::new)
    }

    /// Returns the decoded settings.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// See [`normalize_path`](spantag_normalization::normalize_path).
    pub fn normalize_path(&self, uri: &str, direction: Direction) -> String {
        spantag_normalization::normalize_path(uri, direction, &self.config)
    }

    /// See [`sanitize_url`](spantag_normalization::sanitize_url).
    pub fn sanitize_url(&self, url: &str, drop_userinfo: bool, trim_query_string: bool) -> String {
        spantag_normalization::sanitize_url(url, drop_userinfo, trim_query_string, &self.config)
    }

    /// See [`sanitized_query_string`](spantag_normalization::sanitized_query_string).
    pub fn sanitized_query_string(&self, raw: &str) -> String {
        spantag_normalization::sanitized_query_string(raw, &self.config)
    }

    /// See [`sanitize_post_fields`](spantag_normalization::sanitize_post_fields).
    pub fn sanitize_post_fields(&self, fields: &Value) -> BTreeMap<String, String> {
        spantag_normalization::sanitize_post_fields(fields, &self.config)
    }

    /// See [`PeerServiceTagger::set_peer_service`].
    pub fn set_peer_service<'p, S>(&self, span: &mut S, precursors: &[&'p str]) -> Option<&'p str>
    where
        S: TagSink + ?Sized,
    {
        PeerServiceTagger::new(&self.config).set_peer_service(span, precursors)
    }

    /// Completes a span once the integration has set all its tags.
    ///
    /// Derives `peer.service` from `precursors` and assigns the default operation name if the
    /// span has none. Returns the convention of the span if it was named.
    pub fn finish_span<S>(&self, span: &mut S, precursors: &[&str]) -> Option<Convention>
    where
        S: SpanLike + ?Sized,
    {
        self.set_peer_service(span, precursors);
        spantag_spans::name_span(span)
    }
}
