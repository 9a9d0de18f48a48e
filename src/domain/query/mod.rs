//! Query Context - 列表查询的值对象
//!
//! 职责:
//! - 过滤谓词树
//! - 字段投影与排序
//! - 分页窗口与分页元数据

mod descriptor;
mod filter;
mod pagination;

pub use descriptor::{
    Projection, QueryDescriptor, SortDirection, SortKey, DEFAULT_SORT_FIELD, ID_FIELD,
};
pub use filter::{Comparison, Filter, KeySegment, Predicate, ResolvedPredicate};
pub use pagination::{PageRef, PageWindow, Pagination, DEFAULT_LIMIT, DEFAULT_PAGE};
