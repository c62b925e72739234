use spantag_config::{Config, PeerServiceConfig};
use spantag_conventions::{
    DB_INSTANCE, MESSAGING_DESTINATION_NAME, NETWORK_DESTINATION_NAME, OUT_HOST, PEER_SERVICE,
    PEER_SERVICE_REMAPPED_FROM, PEER_SERVICE_SOURCE,
};
use spantag_protocol::TagSink;

/// Precursor tags of database client spans.
pub const DB_PEER_SERVICE_PRECURSORS: &[&str] = &[DB_INSTANCE, OUT_HOST];

/// Precursor tags of HTTP client spans.
pub const HTTP_CLIENT_PEER_SERVICE_PRECURSORS: &[&str] = &[NETWORK_DESTINATION_NAME, OUT_HOST];

/// Precursor tags of messaging spans.
pub const MESSAGING_PEER_SERVICE_PRECURSORS: &[&str] = &[MESSAGING_DESTINATION_NAME, OUT_HOST];

/// Derives the `peer.service` tag of client spans.
///
/// Tagging is opt-in. If enabled, a `peer.service` tag set by the integration is kept. Otherwise
/// the value of the first non-empty precursor tag is used. Either way, the value can be renamed
/// through the configured mapping, and `peer.service.source` records where it came from.
#[derive(Clone, Copy, Debug)]
pub struct PeerServiceTagger<'a> {
    config: &'a PeerServiceConfig,
}

impl<'a> PeerServiceTagger<'a> {
    /// Creates a tagger for the peer service settings of `config`.
    pub fn new(config: &'a Config) -> Self {
        Self {
            config: config.peer_service(),
        }
    }

    /// Returns `true` if peer service tagging is enabled.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Sets `peer.service` from the first precursor tag with a value.
    ///
    /// Returns the tag the value was taken from, or `None` if nothing was tagged.
    ///
    /// ```
    /// use spantag_config::{Config, ConfigKey, MapSource};
    /// use spantag_protocol::{Getter, Tags};
    /// use spantag_spans::PeerServiceTagger;
    ///
    /// let source = MapSource::new().with(ConfigKey::PeerServiceDefaultsEnabled, "true");
    /// let config = Config::from_source(&source);
    ///
    /// let mut tags = Tags::from([("b", "svc-b")]);
    /// PeerServiceTagger::new(&config).set_peer_service(&mut tags, &["a", "b"]);
    ///
    /// assert_eq!(tags.get_tag("peer.service"), Some("svc-b"));
    /// assert_eq!(tags.get_tag("peer.service.source"), Some("b"));
    /// ```
    pub fn set_peer_service<'p, S>(&self, span: &mut S, precursors: &[&'p str]) -> Option<&'p str>
    where
        S: TagSink + ?Sized,
    {
        if !self.config.enabled {
            return None;
        }

        if let Some(service) = span.get_non_empty_tag(PEER_SERVICE) {
            let service = service.to_owned();
            span.set_tag(PEER_SERVICE_SOURCE, PEER_SERVICE.to_owned());
            self.apply_mapping(span, service);
            return Some(PEER_SERVICE);
        }

        let (source, service) = precursors.iter().find_map(|&precursor| {
            let value = span.get_non_empty_tag(precursor)?;
            Some((precursor, value.to_owned()))
        })?;

        span.set_tag(PEER_SERVICE_SOURCE, source.to_owned());
        if !self.apply_mapping(span, service.clone()) {
            span.set_tag(PEER_SERVICE, service);
        }

        Some(source)
    }

    /// Renames `service` through the mapping. Returns `true` if a rename was applied.
    fn apply_mapping<S>(&self, span: &mut S, service: String) -> bool
    where
        S: TagSink + ?Sized,
    {
        let Some(mapped) = self.config.remap(&service) else {
            return false;
        };

        spantag_log::trace!(from = %service, to = mapped, "remapping peer service");
        span.set_tag(PEER_SERVICE, mapped.to_owned());
        span.set_tag(PEER_SERVICE_REMAPPED_FROM, service);
        true
    }
}
