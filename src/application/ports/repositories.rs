//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::bootcamp::{Bootcamp, SphericalCap};
use crate::domain::course::Course;
use crate::domain::query::QueryDescriptor;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    /// 查询执行器拒绝了过滤条件
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Bootcamp Repository
// ============================================================================

/// Bootcamp Repository Port
#[async_trait]
pub trait BootcampRepositoryPort: Send + Sync {
    /// 新增 Bootcamp（name 唯一）
    async fn insert(&self, bootcamp: &Bootcamp) -> Result<(), RepositoryError>;

    /// 更新 Bootcamp 全部字段
    async fn update(&self, bootcamp: &Bootcamp) -> Result<(), RepositoryError>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bootcamp>, RepositoryError>;

    /// 获取所有 Bootcamp
    async fn find_all(&self) -> Result<Vec<Bootcamp>, RepositoryError>;

    /// 按查询描述执行过滤 / 排序 / 分页（投影由调用方处理）
    async fn find_by_query(
        &self,
        query: &QueryDescriptor,
    ) -> Result<Vec<Bootcamp>, RepositoryError>;

    /// 集合总数（不受过滤影响）
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// 查找位置落在球冠内的 Bootcamp
    async fn find_within(&self, cap: &SphericalCap) -> Result<Vec<Bootcamp>, RepositoryError>;

    /// 更新照片文件名，返回是否命中记录
    async fn update_photo(&self, id: Uuid, photo: &str) -> Result<bool, RepositoryError>;

    /// 删除 Bootcamp（级联删除其课程）
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

// ============================================================================
// Course Repository
// ============================================================================

/// Course Repository Port
#[async_trait]
pub trait CourseRepositoryPort: Send + Sync {
    async fn insert(&self, course: &Course) -> Result<(), RepositoryError>;

    async fn update(&self, course: &Course) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Course>, RepositoryError>;

    /// 获取某个 Bootcamp 的课程
    async fn find_by_bootcamp(&self, bootcamp_id: Uuid) -> Result<Vec<Course>, RepositoryError>;

    /// 批量获取多个 Bootcamp 的课程（用于 populate）
    async fn find_by_bootcamps(
        &self,
        bootcamp_ids: &[Uuid],
    ) -> Result<Vec<Course>, RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
