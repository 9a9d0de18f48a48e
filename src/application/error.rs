//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;
use uuid::Uuid;

use crate::application::ports::{GeocodeError, PhotoStorageError, RepositoryError};
use crate::domain::ValidationErrors;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到（消息即对外展示的文案）
    #[error("{message}")]
    NotFound { message: String },

    /// ID 格式非法，无法转换为 UUID
    #[error("Resource not found with id of {0}")]
    MalformedId(String),

    /// 字段校验错误
    #[error("{0}")]
    ValidationError(ValidationErrors),

    /// 唯一字段冲突
    #[error("Duplicate field value entered")]
    Duplicate(String),

    /// 请求参数错误（如上传约束）
    #[error("{0}")]
    BadRequest(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 存储错误（对外文案随错误携带）
    #[error("{public}")]
    StorageError { public: String, detail: String },

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// `Bootcamp not found with id of <id>`
    pub fn bootcamp_not_found(id: impl std::fmt::Display) -> Self {
        Self::not_found(format!("Bootcamp not found with id of {}", id))
    }

    /// `No course with the id of <id>`
    pub fn course_not_found(id: impl std::fmt::Display) -> Self {
        Self::not_found(format!("No course with the id of {}", id))
    }

    /// `No bootcamp with the id of <id>`（创建课程时引用的 Bootcamp 不存在）
    pub fn owning_bootcamp_not_found(id: impl std::fmt::Display) -> Self {
        Self::not_found(format!("No bootcamp with the id of {}", id))
    }

    /// 创建请求参数错误
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

/// 解析路径中的记录 ID
pub fn parse_record_id(raw: &str) -> Result<Uuid, ApplicationError> {
    Uuid::parse_str(raw).map_err(|_| ApplicationError::MalformedId(raw.to_string()))
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(field) => Self::Duplicate(field),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApplicationError {
    fn from(err: ValidationErrors) -> Self {
        Self::ValidationError(err)
    }
}

impl From<GeocodeError> for ApplicationError {
    fn from(err: GeocodeError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<PhotoStorageError> for ApplicationError {
    fn from(err: PhotoStorageError) -> Self {
        Self::StorageError {
            public: "Problem with file upload".to_string(),
            detail: err.to_string(),
        }
    }
}
