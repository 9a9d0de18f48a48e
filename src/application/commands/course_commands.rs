//! Course Commands

use uuid::Uuid;

use crate::domain::course::CourseChanges;

/// 创建课程命令
#[derive(Debug, Clone)]
pub struct CreateCourse {
    pub bootcamp_id: Uuid,
    pub changes: CourseChanges,
}

/// 更新课程命令
#[derive(Debug, Clone)]
pub struct UpdateCourse {
    pub course_id: Uuid,
    pub changes: CourseChanges,
}

/// 删除课程命令
#[derive(Debug, Clone)]
pub struct DeleteCourse {
    pub course_id: Uuid,
}
