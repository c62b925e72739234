use spantag_protocol::Getter;

use self::Condition::{Equals, Present};
use crate::SpanKind::{self, Client, Consumer, Internal, Producer, Server};
use crate::consts::*;

/// Operation name of spans that match no convention.
pub const UNKNOWN_OPERATION_NAME: &str = "otel_unknown";

/// Error returned when parsing an unknown [`Convention`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseConventionError;

/// The semantic role of a span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Convention {
    /// An incoming HTTP request.
    HttpServer,
    /// An outgoing HTTP request.
    HttpClient,
    /// A database query.
    Database,
    /// A GraphQL operation.
    GraphqlServer,
    /// An incoming remote procedure call.
    RpcServer,
    /// An outgoing remote procedure call.
    RpcClient,
    /// A call to an AWS service.
    AwsClient,
    /// A message sent to a broker.
    MessageProducer,
    /// A message received from a broker.
    MessageConsumer,
    /// A serverless function invocation.
    FaasServer,
    /// A call to a serverless function.
    FaasClient,
    /// A server span without more specific tags.
    GenericServer,
    /// A client span without more specific tags.
    GenericClient,
    /// An internal span without more specific tags.
    GenericInternal,
    /// A producer span without more specific tags.
    GenericProducer,
    /// A consumer span without more specific tags.
    GenericConsumer,
    /// No convention applies.
    Unknown,
}

spantag_common::derive_fromstr_and_display!(Convention, ParseConventionError, {
    Convention::HttpServer => "http_server",
    Convention::HttpClient => "http_client",
    Convention::Database => "database",
    Convention::GraphqlServer => "graphql_server",
    Convention::RpcServer => "rpc_server",
    Convention::RpcClient => "rpc_client",
    Convention::AwsClient => "aws_client",
    Convention::MessageProducer => "message_producer",
    Convention::MessageConsumer => "message_consumer",
    Convention::FaasServer => "faas_server",
    Convention::FaasClient => "faas_client",
    Convention::GenericServer => "generic_server",
    Convention::GenericClient => "generic_client",
    Convention::GenericInternal => "generic_internal",
    Convention::GenericProducer => "generic_producer",
    Convention::GenericConsumer => "generic_consumer",
    Convention::Unknown => "unknown",
});

spantag_common::impl_str_serde!(Convention, "a span convention");

/// A tag condition of a classification rule.
#[derive(Clone, Copy, Debug)]
enum Condition {
    /// The tag is set, possibly to an empty value.
    Present(&'static str),
    /// The tag is set to the given value.
    Equals(&'static str, &'static str),
}

impl Condition {
    fn matches(self, meta: &(impl Getter + ?Sized)) -> bool {
        match self {
            Self::Present(tag) => meta.has_tag(tag),
            Self::Equals(tag, value) => meta.get_tag(tag) == Some(value),
        }
    }
}

/// A row of the classification table.
struct Rule {
    /// Span kinds the rule applies to. An empty list applies to all spans.
    kinds: &'static [SpanKind],
    conditions: &'static [Condition],
    convention: Convention,
}

impl Rule {
    const fn new(
        kinds: &'static [SpanKind],
        conditions: &'static [Condition],
        convention: Convention,
    ) -> Self {
        Self {
            kinds,
            conditions,
            convention,
        }
    }

    fn matches(&self, kind: Option<SpanKind>, meta: &(impl Getter + ?Sized)) -> bool {
        let kind_matches = self.kinds.is_empty() || kind.is_some_and(|k| self.kinds.contains(&k));
        kind_matches && self.conditions.iter().all(|c| c.matches(meta))
    }
}

/// Classification rules in order of precedence. The first matching rule wins.
static RULES: &[Rule] = &[
    Rule::new(&[Server], &[Present(HTTP_REQUEST_METHOD)], Convention::HttpServer),
    Rule::new(&[Client], &[Present(HTTP_REQUEST_METHOD)], Convention::HttpClient),
    Rule::new(&[Client], &[Present(DB_SYSTEM)], Convention::Database),
    Rule::new(
        &[Client, Consumer],
        &[Present(MESSAGING_SYSTEM), Present(MESSAGING_OPERATION)],
        Convention::MessageConsumer,
    ),
    Rule::new(
        &[Producer],
        &[Present(MESSAGING_SYSTEM), Present(MESSAGING_OPERATION)],
        Convention::MessageProducer,
    ),
    Rule::new(&[Client], &[Equals(RPC_SYSTEM, "aws-api")], Convention::AwsClient),
    Rule::new(&[Client], &[Present(RPC_SYSTEM)], Convention::RpcClient),
    Rule::new(&[Server], &[Present(RPC_SYSTEM)], Convention::RpcServer),
    Rule::new(&[Server], &[Present(FAAS_TRIGGER)], Convention::FaasServer),
    Rule::new(&[Client], &[Present(FAAS_INVOKED_PROVIDER)], Convention::FaasClient),
    Rule::new(&[], &[Present(GRAPHQL_OPERATION_TYPE)], Convention::GraphqlServer),
    Rule::new(&[Server], &[], Convention::GenericServer),
    Rule::new(&[Client], &[], Convention::GenericClient),
    Rule::new(&[Internal], &[], Convention::GenericInternal),
    Rule::new(&[Producer], &[], Convention::GenericProducer),
    Rule::new(&[Consumer], &[], Convention::GenericConsumer),
];

/// Classifies a span by its `span.kind` and semantic tags.
///
/// Spans without a recognized `span.kind` are only classified as GraphQL operations, if they
/// carry a `graphql.operation.type` tag.
pub fn classify(meta: &(impl Getter + ?Sized)) -> Convention {
    let kind = meta
        .get_tag(SPAN_KIND)
        .and_then(|kind| kind.parse::<SpanKind>().ok());

    RULES
        .iter()
        .find(|rule| rule.matches(kind, meta))
        .map_or(Convention::Unknown, |rule| rule.convention)
}

/// Derives the default operation name of a span with the given convention.
///
/// Returns `"otel_unknown"` if a tag that the name is built from is missing.
pub fn default_operation_name(convention: Convention, meta: &(impl Getter + ?Sized)) -> String {
    convention
        .operation_name(meta)
        .unwrap_or_else(|| UNKNOWN_OPERATION_NAME.to_owned())
}

impl Convention {
    /// Returns the span kind of generic conventions.
    pub fn generic_kind(self) -> Option<SpanKind> {
        Some(match self {
            Self::GenericServer => SpanKind::Server,
            Self::GenericClient => SpanKind::Client,
            Self::GenericInternal => SpanKind::Internal,
            Self::GenericProducer => SpanKind::Producer,
            Self::GenericConsumer => SpanKind::Consumer,
            _ => return None,
        })
    }

    fn operation_name(self, meta: &(impl Getter + ?Sized)) -> Option<String> {
        let tag = |name: &str| meta.get_tag(name);

        Some(match self {
            Self::HttpServer => "http.server.request".to_owned(),
            Self::HttpClient => "http.client.request".to_owned(),
            Self::Database => format!("{}.query", tag(DB_SYSTEM)?),
            Self::GraphqlServer => "graphql.server.request".to_owned(),
            Self::RpcServer => format!("{}.server.request", tag(RPC_SYSTEM)?),
            Self::RpcClient => format!("{}.client.request", tag(RPC_SYSTEM)?),
            Self::AwsClient => match tag(RPC_SERVICE) {
                Some(service) => format!("aws.{}.request", service.to_lowercase()),
                None => "aws.request".to_owned(),
            },
            Self::MessageProducer | Self::MessageConsumer => format!(
                "{}.{}",
                tag(MESSAGING_SYSTEM)?.to_lowercase(),
                tag(MESSAGING_OPERATION)?
            ),
            Self::FaasServer => format!("{}.invoke", tag(FAAS_TRIGGER)?),
            Self::FaasClient => format!(
                "{}.{}.invoke",
                tag(FAAS_INVOKED_PROVIDER)?,
                tag(FAAS_INVOKED_NAME)?
            ),
            Self::GenericServer
            | Self::GenericClient
            | Self::GenericInternal
            | Self::GenericProducer
            | Self::GenericConsumer => {
                let role = self.generic_kind()?;
                match tag(NETWORK_PROTOCOL_NAME) {
                    Some(protocol) => format!("{protocol}.{role}.request"),
                    None => format!("{role}.request"),
                }
            }
            Self::Unknown => return None,
        })
    }
}
