//! File Storage - 文件系统照片存储实现
//!
//! 实现 PhotoStoragePort trait

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::application::ports::{PhotoStorageError, PhotoStoragePort};

/// 文件系统照片存储
pub struct FilePhotoStorage {
    /// 上传根目录
    base_dir: PathBuf,
}

impl FilePhotoStorage {
    /// 创建新的文件存储，确保目录存在
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, PhotoStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| PhotoStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    /// 获取上传根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// 文件名只能是单个普通路径段
    fn resolve(&self, file_name: &str) -> Result<PathBuf, PhotoStorageError> {
        let mut components = Path::new(file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.base_dir.join(file_name)),
            _ => Err(PhotoStorageError::InvalidFileName(file_name.to_string())),
        }
    }
}

#[async_trait]
impl PhotoStoragePort for FilePhotoStorage {
    async fn save(&self, file_name: &str, data: &[u8]) -> Result<PathBuf, PhotoStorageError> {
        let path = self.resolve(file_name)?;

        fs::write(&path, data)
            .await
            .map_err(|e| PhotoStorageError::IoError(e.to_string()))?;

        tracing::debug!(path = %path.display(), size = data.len(), "Saved photo");

        Ok(path)
    }
}
