//! HTTP Error Handling
//!
//! 所有错误在这里统一转换为 HTTP 状态码和 `{success:false, error}` 响应体

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 5xx 时对外展示的统一文案
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Timeout,
    /// public 对外返回，detail 只写日志
    Internal { public: String, detail: String },
}

impl ApiError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            public: SERVER_ERROR_MESSAGE.to_string(),
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Resource not found");
                msg
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request");
                msg
            }
            ApiError::Timeout => {
                tracing::error!(status = status.as_u16(), "Request timed out");
                "Request timed out".to_string()
            }
            ApiError::Internal { public, detail } => {
                tracing::error!(status = status.as_u16(), error = %detail, "Internal server error");
                public
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { message } => ApiError::NotFound(message),
            e @ ApplicationError::MalformedId(_) => ApiError::NotFound(e.to_string()),
            ApplicationError::ValidationError(errors) => ApiError::BadRequest(errors.to_string()),
            e @ ApplicationError::Duplicate(_) => ApiError::BadRequest(e.to_string()),
            ApplicationError::BadRequest(msg) => ApiError::BadRequest(msg),
            ApplicationError::StorageError { public, detail } => {
                ApiError::Internal { public, detail }
            }
            e @ (ApplicationError::RepositoryError(_)
            | ApplicationError::ExternalServiceError(_)
            | ApplicationError::InternalError(_)) => ApiError::internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RepositoryError;
    use crate::domain::ValidationErrors;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let err = ApiError::from(ApplicationError::bootcamp_not_found("abc"));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Bootcamp not found with id of abc");
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found() {
        let err = ApiError::from(ApplicationError::MalformedId("xyz".to_string()));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Resource not found with id of xyz");
    }

    #[tokio::test]
    async fn test_duplicate_is_bad_request() {
        let err = ApiError::from(ApplicationError::from(RepositoryError::Duplicate(
            "UNIQUE constraint failed: bootcamps.name".to_string(),
        )));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Duplicate field value entered");
    }

    #[tokio::test]
    async fn test_validation_messages_joined() {
        let mut errors = ValidationErrors::new();
        errors.push("Please add a name");
        errors.push("Please add a description");
        let (status, body) = render(ApplicationError::from(errors).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please add a name, Please add a description");
    }

    #[tokio::test]
    async fn test_internal_detail_hidden() {
        let err = ApiError::from(ApplicationError::RepositoryError(
            "disk I/O error".to_string(),
        ));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], SERVER_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_storage_error_public_message() {
        let err = ApiError::from(ApplicationError::StorageError {
            public: "Problem with file upload".to_string(),
            detail: "permission denied".to_string(),
        });
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Problem with file upload");
    }

    #[tokio::test]
    async fn test_timeout() {
        let (status, body) = render(ApiError::Timeout).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body["error"], "Request timed out");
    }
}
