use axum::body::{Body, Bytes, to_bytes};
use axum::http::{HeaderName, HeaderValue, Method, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use metrics::{counter, histogram};
use std::time::Instant;
use tracing::info;

use crate::interface::http::error::ApiError;

static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

// Same ceiling as axum's default JSON body limit.
const LOGGED_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// A per-request identifier echoed back to the caller for support and debugging.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Reuses a client-provided `x-request-id` or generates one, and echoes it back.
pub async fn request_id_middleware(mut req: Request<Body>, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let request_id = RequestId(request_id);
    req.extensions_mut().insert(request_id.clone());

    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.0) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), value);
    }
    response
}

fn method_label(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "POST" => "POST",
        "PUT" => "PUT",
        "DELETE" => "DELETE",
        "HEAD" => "HEAD",
        "OPTIONS" => "OPTIONS",
        _ => "OTHER",
    }
}

fn status_label(status: u16) -> &'static str {
    match status {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

fn body_for_log(bytes: &Bytes) -> String {
    if bytes.is_empty() {
        "-".to_string()
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

/// One structured log line per request: method, path, status, size, latency
/// and the request body.
pub async fn request_log_middleware(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id = req.extensions().get::<RequestId>().map(|r| r.0.clone());
    let start = Instant::now();

    // The body is buffered for the log line and handed on unchanged.
    let (parts, body) = req.into_parts();
    let (body, response) = match to_bytes(body, LOGGED_BODY_LIMIT).await {
        Ok(bytes) => {
            let logged = body_for_log(&bytes);
            let req = Request::from_parts(parts, Body::from(bytes));
            (logged, next.run(req).await)
        }
        Err(err) => (
            "-".to_string(),
            ApiError::MalformedBody(err.to_string()).into_response(),
        ),
    };

    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();
    let content_length = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let (method_tag, status_tag) = (method_label(&method), status_label(status));
    counter!("http_requests_total", "method" => method_tag, "status" => status_tag)
        .increment(1);
    histogram!(
        "http_request_duration_ms",
        "method" => method_tag,
        "status" => status_tag
    )
    .record(latency_ms as f64);
    info!(
        request_id = request_id.as_deref().unwrap_or(""),
        method = %method,
        path = %path,
        status,
        content_length = %content_length,
        latency_ms,
        body = %body,
        "http_request"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::middleware;
    use axum::routing::post;
    use tower::util::ServiceExt;

    #[test]
    fn given_empty_body_when_formatted_for_log_should_use_placeholder() {
        assert_eq!(body_for_log(&Bytes::new()), "-");
    }

    #[test]
    fn given_json_body_when_formatted_for_log_should_keep_text() {
        let body = Bytes::from_static(br#"{"name":"Ada","number":"123"}"#);

        assert_eq!(body_for_log(&body), r#"{"name":"Ada","number":"123"}"#);
    }

    #[tokio::test]
    async fn given_logged_request_body_when_handled_should_still_reach_handler() {
        let app = Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .layer(middleware::from_fn(request_log_middleware));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/echo")
                    .body(Body::from(r#"{"name":"Ada"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"name":"Ada"}"#);
    }

    #[test]
    fn given_status_codes_when_labelled_should_bucket_by_class() {
        assert_eq!(status_label(204), "2xx");
        assert_eq!(status_label(404), "4xx");
        assert_eq!(status_label(500), "5xx");
        assert_eq!(status_label(42), "other");
    }

    #[test]
    fn given_uncommon_method_when_labelled_should_collapse_to_other() {
        assert_eq!(method_label(&Method::PUT), "PUT");
        assert_eq!(method_label(&Method::PATCH), "OTHER");
    }
}
