//! HTTP Middleware
//!
//! 4xx / 5xx 响应日志

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// 当状态码为 4xx 或 5xx 时记录请求方法、路径和耗时
///
/// 错误文案本身在 `ApiError::into_response()` 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::error::ApiError;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    async fn ok_handler() -> &'static str {
        "OK"
    }

    async fn not_found_handler() -> Result<&'static str, ApiError> {
        Err(ApiError::NotFound("Bootcamp not found with id of 1".to_string()))
    }

    async fn error_handler() -> Result<&'static str, ApiError> {
        Err(ApiError::internal("boom"))
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(ok_handler))
            .route("/not-found", get(not_found_handler))
            .route("/error", get(error_handler))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    async fn status_of(uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_test_router()
            .oneshot(request)
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_passes_through_statuses() {
        assert_eq!(status_of("/ok").await, StatusCode::OK);
        assert_eq!(status_of("/not-found").await, StatusCode::NOT_FOUND);
        assert_eq!(status_of("/error").await, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
