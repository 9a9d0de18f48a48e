//! Course Queries

use uuid::Uuid;

/// 列出课程；指定 bootcamp_id 时只列该 Bootcamp 的课程
#[derive(Debug, Clone)]
pub struct ListCourses {
    pub bootcamp_id: Option<Uuid>,
}

/// 获取单个课程
#[derive(Debug, Clone)]
pub struct GetCourse {
    pub course_id: Uuid,
}
