//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::bootcamp::{BootcampChanges, Location};
use crate::domain::course::CourseChanges;
use crate::domain::query::Pagination;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式，未设置的字段不输出
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            count: None,
            pagination: None,
            data: Some(data),
            message: None,
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// 列表响应，附带本页数量
    pub fn list(data: Vec<T>) -> Self {
        Self {
            count: Some(data.len()),
            ..Self::success(data)
        }
    }

    /// 分页列表响应
    pub fn page(data: Vec<T>, pagination: Pagination) -> Self {
        Self {
            pagination: Some(pagination),
            ..Self::list(data)
        }
    }
}

impl ApiResponse<()> {
    /// 成功但只带消息
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            count: None,
            pagination: None,
            data: None,
            message: Some(message.into()),
        }
    }
}

// ============================================================================
// Bootcamp DTOs
// ============================================================================

/// 创建 / 更新 Bootcamp 请求体，所有字段可选，校验在领域层完成
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootcampRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub location: Option<Location>,
    pub careers: Option<Vec<String>>,
    pub average_rating: Option<f64>,
    pub average_cost: Option<f64>,
    pub housing: Option<bool>,
    pub job_assistance: Option<bool>,
    pub job_guarantee: Option<bool>,
    pub accept_gi: Option<bool>,
}

impl From<BootcampRequest> for BootcampChanges {
    fn from(req: BootcampRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            website: req.website,
            phone: req.phone,
            email: req.email,
            address: req.address,
            location: req.location,
            careers: req.careers,
            average_rating: req.average_rating,
            average_cost: req.average_cost,
            housing: req.housing,
            job_assistance: req.job_assistance,
            job_guarantee: req.job_guarantee,
            accept_gi: req.accept_gi,
        }
    }
}

// ============================================================================
// Course DTOs
// ============================================================================

/// 数字或字符串（weeks 两种写法都接受）
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl From<TextOrNumber> for String {
    fn from(value: TextOrNumber) -> Self {
        match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }
    }
}

/// 创建 / 更新课程请求体
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub weeks: Option<TextOrNumber>,
    pub tuition: Option<f64>,
    pub minimum_skill: Option<String>,
    pub scholarship_available: Option<bool>,
    /// 所属 Bootcamp ID，仅 `POST /courses` 使用
    pub bootcamp: Option<String>,
}

impl CourseRequest {
    /// 拆分为 (bootcamp 字段, 课程字段)
    pub fn into_parts(self) -> (Option<String>, CourseChanges) {
        let changes = CourseChanges {
            title: self.title,
            description: self.description,
            weeks: self.weeks.map(String::from),
            tuition: self.tuition,
            minimum_skill: self.minimum_skill,
            scholarship_available: self.scholarship_available,
        };
        (self.bootcamp, changes)
    }
}
