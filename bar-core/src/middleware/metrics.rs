//! HTTP observability middleware
//!
//! Implemented as a Tower Layer/Service; combines request ID propagation and
//! metrics recording.

use axum::{body::Body, http::Request, response::Response};
use metrics::{counter, gauge, histogram};
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};
use tower::{Layer, Service};
use tracing::Instrument;
use uuid::Uuid;

/// Tower Layer for HTTP observability (request ID + metrics).
#[derive(Clone)]
pub struct ObservabilityLayer;

impl<S> Layer<S> for ObservabilityLayer {
    type Service = ObservabilityMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ObservabilityMiddleware { inner }
    }
}

/// Tower Service that records HTTP metrics and propagates request IDs.
#[derive(Clone)]
pub struct ObservabilityMiddleware<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for ObservabilityMiddleware<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let method = request.method().to_string();
        let path = normalize_path(request.uri().path());

        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        gauge!("bar_http_requests_in_flight").increment(1.0);
        let start = Instant::now();

        let mut inner = self.inner.clone();
        // `path` is normalized so the token never lands in span fields.
        let span = tracing::info_span!("request", request_id = %request_id, method = %method, path = %path);

        Box::pin(
            async move {
                let result = inner.call(request).await;
                gauge!("bar_http_requests_in_flight").decrement(1.0);
                let mut response = result?;

                let duration = start.elapsed().as_secs_f64();
                let status = response.status().as_u16().to_string();

                counter!("bar_http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status)
                    .increment(1);
                histogram!("bar_http_request_duration_seconds", "method" => method, "path" => path)
                    .record(duration);

                if let Ok(val) = request_id.parse() {
                    response.headers_mut().insert("x-request-id", val);
                }

                Ok(response)
            }
            .instrument(span),
        )
    }
}

/// Replace the segment following `token` with `{token}`.
///
/// Tokens are capabilities and unbounded in number; they must not become
/// metric labels or log fields.
fn normalize_path(path: &str) -> String {
    let mut previous = "";
    path.split('/')
        .map(|seg| {
            let normalized = if previous == "token" && !seg.is_empty() {
                "{token}"
            } else {
                seg
            };
            previous = seg;
            normalized
        })
        .collect::<Vec<_>>()
        .join("/")
}
