//! Domain Layer - 领域层
//!
//! 包含三个上下文:
//! - Bootcamp Context: 训练营及地理位置
//! - Course Context: 课程
//! - Query Context: 过滤 / 排序 / 分页值对象

pub mod bootcamp;
pub mod course;
pub mod query;

// 共享的字段校验
mod validation;

pub use validation::ValidationErrors;
