macro_rules! convention_tags {
    ($($(#[$meta:meta])* $name:ident => $tag:literal,)*) => {
        $($(#[$meta])* pub const $name: &str = $tag;)*

        #[test]
        fn test_tag_names_are_dotted_lowercase() {
            $(
                assert!(
                    $name.split('.').all(|part| !part.is_empty()
                        && part.bytes().all(|b| b.is_ascii_lowercase() || b == b'_')),
                    "{}",
                    $name
                );
            )*
        }
    };
}

convention_tags!(
    /// The role of a span: `server`, `client`, `internal`, `producer` or `consumer`.
    SPAN_KIND => "span.kind",
    /// HTTP request method of HTTP server and client spans.
    HTTP_REQUEST_METHOD => "http.request.method",
    /// Database product of database client spans, such as `mysql`.
    DB_SYSTEM => "db.system",
    /// Database instance or schema name.
    DB_INSTANCE => "db.instance",
    /// Messaging product, such as `kafka`.
    MESSAGING_SYSTEM => "messaging.system",
    /// Messaging operation, such as `publish` or `receive`.
    MESSAGING_OPERATION => "messaging.operation",
    /// Queue or topic name of messaging spans.
    MESSAGING_DESTINATION_NAME => "messaging.destination.name",
    /// RPC framework, such as `grpc` or `aws-api`.
    RPC_SYSTEM => "rpc.system",
    /// RPC service name, such as the AWS service.
    RPC_SERVICE => "rpc.service",
    /// Trigger type of serverless function invocations.
    FAAS_TRIGGER => "faas.trigger",
    /// Cloud provider of an invoked serverless function.
    FAAS_INVOKED_PROVIDER => "faas.invoked_provider",
    /// Name of an invoked serverless function.
    FAAS_INVOKED_NAME => "faas.invoked_name",
    /// GraphQL operation type, such as `query`.
    GRAPHQL_OPERATION_TYPE => "graphql.operation.type",
    /// Application protocol, such as `amqp`.
    NETWORK_PROTOCOL_NAME => "network.protocol.name",
    /// Host name of the remote peer.
    NETWORK_DESTINATION_NAME => "network.destination.name",
    /// Host name of the remote peer, as set by tracer integrations.
    OUT_HOST => "out.host",
    /// The remote service a span talks to.
    PEER_SERVICE => "peer.service",
    /// The tag `peer.service` was derived from.
    PEER_SERVICE_SOURCE => "peer.service.source",
    /// The `peer.service` value before it was renamed by the configured mapping.
    PEER_SERVICE_REMAPPED_FROM => "peer.service.remapped_from",
);
