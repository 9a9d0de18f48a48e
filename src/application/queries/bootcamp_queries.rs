//! Bootcamp Queries

use uuid::Uuid;

/// 列出所有 Bootcamp（不过滤）
#[derive(Debug, Clone)]
pub struct ListBootcamps;

/// 按 URL 查询参数过滤 / 排序 / 分页 / 投影
#[derive(Debug, Clone)]
pub struct ListBootcampsByCondition {
    pub params: Vec<(String, String)>,
}

/// 获取单个 Bootcamp
#[derive(Debug, Clone)]
pub struct GetBootcamp {
    pub bootcamp_id: Uuid,
}

/// 按邮编与半径（英里）查找
#[derive(Debug, Clone)]
pub struct FindBootcampsInRadius {
    pub zipcode: String,
    pub distance_miles: f64,
}
