//! Query Descriptor
//!
//! 原始查询参数 -> (过滤, 投影, 排序, 分页)

use serde_json::Value;

use super::filter::{Filter, Predicate};
use super::pagination::PageWindow;

/// 默认排序字段
pub const DEFAULT_SORT_FIELD: &str = "createdAt";

/// 投影时始终保留的标识字段
pub const ID_FIELD: &str = "id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    /// `-field` 降序，否则升序
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (field, direction) = match raw.strip_prefix('-') {
            Some(field) => (field, SortDirection::Desc),
            None => (raw.strip_prefix('+').unwrap_or(raw), SortDirection::Asc),
        };
        if field.is_empty() {
            return None;
        }
        Some(Self {
            field: field.to_string(),
            direction,
        })
    }
}

/// 字段投影
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    fields: Vec<String>,
}

impl Projection {
    /// 逗号分隔的字段列表，空列表返回 None
    pub fn parse(raw: &str) -> Option<Self> {
        let fields: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(String::from)
            .collect();
        if fields.is_empty() {
            None
        } else {
            Some(Self { fields })
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn includes(&self, field: &str) -> bool {
        field == ID_FIELD || self.fields.iter().any(|f| f == field)
    }

    /// 只保留选中的顶层字段（以及 id）
    pub fn apply(&self, value: Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(
                map.into_iter()
                    .filter(|(key, _)| self.includes(key))
                    .collect(),
            ),
            other => other,
        }
    }
}

/// 每个请求构造一次的查询描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub filter: Filter,
    pub projection: Option<Projection>,
    pub sort: Vec<SortKey>,
    pub window: PageWindow,
}

impl Default for QueryDescriptor {
    fn default() -> Self {
        Self {
            filter: Filter::default(),
            projection: None,
            sort: default_sort(),
            window: PageWindow::default(),
        }
    }
}

fn default_sort() -> Vec<SortKey> {
    vec![SortKey {
        field: DEFAULT_SORT_FIELD.to_string(),
        direction: SortDirection::Desc,
    }]
}

impl QueryDescriptor {
    /// 从 URL 查询参数构造
    ///
    /// 保留参数 (select, sort, page, limit) 按 key 的顶层名匹配并剔除；
    /// 重复的保留参数取第一个
    pub fn from_params<K, V>(params: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Filter::default();
        let mut select = None;
        let mut sort = None;
        let mut page = None;
        let mut limit = None;

        for (key, value) in params {
            let (key, value) = (key.as_ref(), value.as_ref());
            let predicate = Predicate::parse(key, value);
            let slot = match predicate.base_name() {
                Some("select") => Some(&mut select),
                Some("sort") => Some(&mut sort),
                Some("page") => Some(&mut page),
                Some("limit") => Some(&mut limit),
                _ => None,
            };
            match slot {
                Some(slot) => {
                    if slot.is_none() {
                        *slot = Some(value);
                    }
                }
                None => filter.predicates.push(predicate),
            }
        }

        let sort = sort
            .map(|raw| raw.split(',').filter_map(SortKey::parse).collect::<Vec<_>>())
            .filter(|keys| !keys.is_empty())
            .unwrap_or_else(default_sort);

        Self {
            filter,
            projection: select.and_then(Projection::parse),
            sort,
            window: PageWindow::parse(page, limit),
        }
    }
}
