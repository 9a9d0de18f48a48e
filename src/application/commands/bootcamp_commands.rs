//! Bootcamp Commands

use uuid::Uuid;

use crate::domain::bootcamp::BootcampChanges;

/// 创建 Bootcamp 命令
#[derive(Debug, Clone)]
pub struct CreateBootcamp {
    pub changes: BootcampChanges,
}

/// 更新 Bootcamp 命令（部分字段）
#[derive(Debug, Clone)]
pub struct UpdateBootcamp {
    pub bootcamp_id: Uuid,
    pub changes: BootcampChanges,
}

/// 删除 Bootcamp 命令
#[derive(Debug, Clone)]
pub struct DeleteBootcamp {
    pub bootcamp_id: Uuid,
}

/// 上传的照片文件
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// multipart 中 `file` 字段的读取结果
#[derive(Debug, Clone)]
pub enum PhotoPayload {
    /// 请求中没有文件
    Missing,
    /// 请求体超过传输层上限，未能完整读取
    Oversized,
    File(PhotoUpload),
}

/// 上传 Bootcamp 照片命令
#[derive(Debug, Clone)]
pub struct UploadBootcampPhoto {
    pub bootcamp_id: Uuid,
    pub payload: PhotoPayload,
}
