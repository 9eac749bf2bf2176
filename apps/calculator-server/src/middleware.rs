//! HTTP middleware stack around the calculator router.

use std::any::Any;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, Request, Response, StatusCode};
use axum::response::IntoResponse;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::AppConfig;
use crate::cors::{CorsError, build_cors_layer};

pub const X_REQUEST_ID: &str = "x-request-id";

#[must_use]
pub fn request_id_header() -> HeaderName {
    HeaderName::from_static(X_REQUEST_ID)
}

/// Generates a UUID v4 request id when the client did not send one.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeReqId;

impl MakeRequestId for MakeReqId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        id.parse().ok().map(RequestId::new)
    }
}

/// Apply the middleware stack, innermost first.
///
/// At runtime requests pass `SetRequestId` → `PropagateRequestId` → Trace →
/// `CatchPanic` → Timeout → `BodyLimit` → CORS → router.
///
/// # Errors
/// Fails on an invalid CORS configuration.
pub fn apply_middleware_stack(mut router: Router, config: &AppConfig) -> Result<Router, CorsError> {
    // 7) CORS
    if config.cors.enabled {
        router = router.layer(build_cors_layer(&config.cors)?);
    }

    // 6) Body limit
    let limit = config.server.body_limit_bytes;
    router = router.layer(RequestBodyLimitLayer::new(limit));
    router = router.layer(DefaultBodyLimit::max(limit));

    // 5) Timeout
    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        Duration::from_secs(config.server.request_timeout_secs),
    ));

    // 4) Panics become 500 Problems
    router = router.layer(CatchPanicLayer::custom(panic_to_problem));

    // 3) Trace
    router = apply_trace_layer(router);

    // 2) PropagateRequestId
    router = router.layer(PropagateRequestIdLayer::new(request_id_header()));

    // 1) SetRequestId (registered last, runs first)
    router = router.layer(SetRequestIdLayer::new(request_id_header(), MakeReqId));

    Ok(router)
}

fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &Request<Body>| {
                let rid = req
                    .headers()
                    .get(X_REQUEST_ID)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &Response<Body>, latency: Duration, span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                },
            ),
    )
}

#[allow(clippy::needless_pass_by_value)] // CatchPanicLayer hands over the payload by value
fn panic_to_problem(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = message, "request handler panicked");

    calculator::api::rest::error::internal_problem().into_response()
}
