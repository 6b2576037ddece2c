//! HTTP request/response tracing middleware.

use axum::http::{Request, Response, header};
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::{Level, Span};

type MakeSpan = fn(&Request<axum::body::Body>) -> Span;
type OnResponse = fn(&Response<axum::body::Body>, Duration, &Span);

/// Creates a tracing middleware for HTTP requests.
///
/// Every request gets an `INFO` span with method and path. Responses are
/// logged with status and latency; redirects also carry their `Location`
/// so single-view redirects can be followed in the logs. Server errors are
/// logged at `WARN`.
///
/// ```text
/// INFO request{method=GET path=/items/42}: response status=302 latency_ms=0 location=http://example.com/article?ref=1&utm_source=rss
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpan, (), OnResponse> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpan)
        .on_request(())
        .on_response(on_response as OnResponse)
        .on_failure(DefaultOnFailure::new().level(Level::WARN))
}

fn make_span(request: &Request<axum::body::Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

fn on_response(response: &Response<axum::body::Body>, latency: Duration, _span: &Span) {
    let status = response.status().as_u16();
    let latency_ms = latency.as_millis() as u64;

    match response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
    {
        Some(location) => tracing::info!(status, latency_ms, location, "response"),
        None => tracing::info!(status, latency_ms, "response"),
    }
}
