/// Error returned when parsing an unknown [`SpanKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseSpanKindError;

/// The role of a span, read from the `span.kind` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Handles a request from a remote client.
    Server,
    /// Sends a request to a remote server.
    Client,
    /// An operation that does not cross a process boundary.
    Internal,
    /// Sends a message to a broker.
    Producer,
    /// Receives a message from a broker.
    Consumer,
}

spantag_common::derive_fromstr_and_display!(SpanKind, ParseSpanKindError, {
    SpanKind::Server => "server",
    SpanKind::Client => "client",
    SpanKind::Internal => "internal",
    SpanKind::Producer => "producer",
    SpanKind::Consumer => "consumer",
});

spantag_common::impl_str_serde!(SpanKind, "a span kind");
