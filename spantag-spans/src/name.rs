use spantag_conventions::{Convention, classify, default_operation_name};
use spantag_protocol::SpanLike;

/// Assigns the default operation name of the span's convention, unless it already has a name.
///
/// Returns the convention the name was derived from, or `None` if the span was already named.
///
/// ```
/// use spantag_protocol::{SpanData, SpanLike};
/// use spantag_spans::name_span;
///
/// let mut span = SpanData::new([("span.kind", "server"), ("http.request.method", "GET")]);
/// name_span(&mut span);
/// assert_eq!(span.operation_name(), Some("http.server.request"));
/// ```
pub fn name_span(span: &mut (impl SpanLike + ?Sized)) -> Option<Convention> {
    if span.operation_name().is_some_and(|name| !name.is_empty()) {
        return None;
    }

    let convention = classify(&*span);
    let name = default_operation_name(convention, &*span);
    span.set_operation_name(name);
    Some(convention)
}
