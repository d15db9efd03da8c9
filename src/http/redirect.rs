//! HTTP→HTTPS redirect instance.
//!
//! A minimal server whose only job is answering every request with a
//! permanent redirect to the TLS listener. It carries no hooks and no
//! routes; it exists so plaintext traffic on the legacy port lands on the
//! secure host.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;

use crate::app::HTTPS_PORT;

/// Build the redirect-only server instance targeting the given HTTPS host.
pub fn router(https_host: &str) -> Router {
    let host = Arc::new(https_host.to_string());
    Router::new().fallback(move |request: Request| {
        let host = host.clone();
        async move { redirect_response(&host, request.uri()) }
    })
}

/// The redirect for one request, preserving path and query.
///
/// A target that does not form a valid header is answered with 400 and a
/// structured log entry rather than being passed through unredirected.
fn redirect_response(https_host: &str, uri: &Uri) -> Response {
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let target = format!("https://{https_host}:{HTTPS_PORT}{path_and_query}");

    match HeaderValue::try_from(target.as_str()) {
        Ok(location) => {
            tracing::debug!(target = %target, "redirecting to HTTPS");
            (StatusCode::PERMANENT_REDIRECT, [(header::LOCATION, location)]).into_response()
        }
        Err(e) => {
            tracing::warn!(target = %target, error = %e, "failed to build redirect target");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn test_redirect_preserves_path_and_query() {
        let router = router("secure.example.com");
        let request = HttpRequest::builder()
            .uri("/some/path?q=1")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://secure.example.com:443/some/path?q=1"
        );
    }

    #[tokio::test]
    async fn test_redirect_applies_to_any_method_and_path() {
        let router = router("example.com");
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://example.com:443/"
        );
    }
}
