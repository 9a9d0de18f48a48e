//! Photo Storage Port - 上传照片存储抽象

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotoStorageError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),
}

/// Photo Storage Port
#[async_trait]
pub trait PhotoStoragePort: Send + Sync {
    /// 写入文件，返回落盘路径
    async fn save(&self, file_name: &str, data: &[u8]) -> Result<PathBuf, PhotoStorageError>;
}
