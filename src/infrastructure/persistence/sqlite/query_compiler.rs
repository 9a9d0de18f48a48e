//! Query Compiler - 将 QueryDescriptor 编译为 SQL
//!
//! 字段路径（如 `location.city`）经 schema 映射为列名，
//! 取值按列类型转换后绑定，永远不会拼接进 SQL 文本

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use sqlx::{QueryBuilder, Sqlite};

use crate::application::ports::RepositoryError;
use crate::domain::query::{Comparison, Filter, PageWindow, Predicate, SortKey};

/// 列的存储类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnKind {
    Text,
    Real,
    Bool,
    Timestamp,
    /// JSON 数组文本，任一元素满足条件即匹配
    TextList,
}

/// 对外字段路径到列的映射
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldSpec {
    pub path: &'static str,
    pub column: &'static str,
    pub kind: ColumnKind,
}

const fn field(path: &'static str, column: &'static str, kind: ColumnKind) -> FieldSpec {
    FieldSpec { path, column, kind }
}

pub(crate) const BOOTCAMP_FIELDS: &[FieldSpec] = &[
    field("id", "id", ColumnKind::Text),
    field("name", "name", ColumnKind::Text),
    field("description", "description", ColumnKind::Text),
    field("website", "website", ColumnKind::Text),
    field("phone", "phone", ColumnKind::Text),
    field("email", "email", ColumnKind::Text),
    field("address", "address", ColumnKind::Text),
    field(
        "location.formattedAddress",
        "location_formatted_address",
        ColumnKind::Text,
    ),
    field("location.street", "location_street", ColumnKind::Text),
    field("location.city", "location_city", ColumnKind::Text),
    field("location.state", "location_state", ColumnKind::Text),
    field("location.zipcode", "location_zipcode", ColumnKind::Text),
    field("location.country", "location_country", ColumnKind::Text),
    field("careers", "careers", ColumnKind::TextList),
    field("averageRating", "average_rating", ColumnKind::Real),
    field("averageCost", "average_cost", ColumnKind::Real),
    field("photo", "photo", ColumnKind::Text),
    field("housing", "housing", ColumnKind::Bool),
    field("jobAssistance", "job_assistance", ColumnKind::Bool),
    field("jobGuarantee", "job_guarantee", ColumnKind::Bool),
    field("acceptGi", "accept_gi", ColumnKind::Bool),
    field("createdAt", "created_at", ColumnKind::Timestamp),
];

/// 时间戳统一存为固定精度的 RFC3339 文本，按字典序即按时间序
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

/// 待绑定的参数值
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SqlValue {
    Text(String),
    Real(f64),
    Integer(i64),
}

impl ColumnKind {
    /// 将查询字符串转换为列类型的值
    fn cast(&self, raw: &str) -> Result<SqlValue, RepositoryError> {
        let invalid = || RepositoryError::InvalidQuery(format!("Cast failed for value `{raw}`"));
        match self {
            Self::Text | Self::TextList => Ok(SqlValue::Text(raw.to_string())),
            Self::Real => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(SqlValue::Real)
                .ok_or_else(invalid),
            Self::Bool => match raw.trim() {
                "true" | "1" => Ok(SqlValue::Integer(1)),
                "false" | "0" => Ok(SqlValue::Integer(0)),
                _ => Err(invalid()),
            },
            Self::Timestamp => {
                let raw = raw.trim();
                let ts = match DateTime::parse_from_rfc3339(raw) {
                    Ok(ts) => ts.with_timezone(&Utc),
                    Err(_) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .map(|dt| dt.and_utc())
                        .ok_or_else(invalid)?,
                };
                Ok(SqlValue::Text(format_timestamp(&ts)))
            }
        }
    }
}

fn push_value(builder: &mut QueryBuilder<'_, Sqlite>, value: SqlValue) {
    match value {
        SqlValue::Text(v) => builder.push_bind(v),
        SqlValue::Real(v) => builder.push_bind(v),
        SqlValue::Integer(v) => builder.push_bind(v),
    };
}

fn lookup(fields: &[FieldSpec], path: &str) -> Option<FieldSpec> {
    fields.iter().find(|f| f.path == path).copied()
}

/// 追加 ` WHERE ...`
///
/// 未知字段匹配不到任何记录；操作符位置错误或取值无法转换时返回 InvalidQuery
pub(crate) fn push_filter(
    builder: &mut QueryBuilder<'_, Sqlite>,
    fields: &[FieldSpec],
    filter: &Filter,
) -> Result<(), RepositoryError> {
    builder.push(" WHERE 1 = 1");

    for predicate in &filter.predicates {
        let resolved = predicate
            .resolve()
            .ok_or_else(|| RepositoryError::InvalidQuery("Unsupported filter key".to_string()))?;

        let spec = match lookup(fields, &resolved.path) {
            Some(spec) => spec,
            None => {
                builder.push(" AND 0 = 1");
                continue;
            }
        };

        let values = match resolved.comparison {
            Comparison::In => Predicate::list_values(resolved.value)
                .into_iter()
                .map(|v| spec.kind.cast(v))
                .collect::<Result<Vec<_>, _>>()?,
            _ => vec![spec.kind.cast(resolved.value)?],
        };

        if values.is_empty() {
            builder.push(" AND 0 = 1");
            continue;
        }

        let is_list = spec.kind == ColumnKind::TextList;
        if is_list {
            builder.push(format!(
                " AND EXISTS (SELECT 1 FROM json_each({}) WHERE json_each.value ",
                spec.column
            ));
        } else {
            builder.push(format!(" AND {} ", spec.column));
        }

        builder.push(resolved.comparison.as_sql());
        if resolved.comparison == Comparison::In {
            builder.push(" (");
            for (i, value) in values.into_iter().enumerate() {
                if i > 0 {
                    builder.push(", ");
                }
                push_value(builder, value);
            }
            builder.push(")");
        } else {
            builder.push(" ");
            for value in values {
                push_value(builder, value);
            }
        }

        if is_list {
            builder.push(")");
        }
    }

    Ok(())
}

/// 追加 ` ORDER BY ...`，未知或列表字段被忽略，rowid 保证顺序稳定
pub(crate) fn push_order_by(
    builder: &mut QueryBuilder<'_, Sqlite>,
    fields: &[FieldSpec],
    sort: &[SortKey],
) {
    builder.push(" ORDER BY ");
    for key in sort {
        if let Some(spec) = lookup(fields, &key.field) {
            if spec.kind != ColumnKind::TextList {
                builder.push(format!("{} {}, ", spec.column, key.direction.as_sql()));
            }
        }
    }
    builder.push("rowid ASC");
}

/// 追加 ` LIMIT ? OFFSET ?`
pub(crate) fn push_window(
    builder: &mut QueryBuilder<'_, Sqlite>,
    window: &PageWindow,
) -> Result<(), RepositoryError> {
    let offset = i64::try_from(window.start_index())
        .map_err(|_| RepositoryError::InvalidQuery("Page out of range".to_string()))?;
    builder.push(" LIMIT ");
    builder.push_bind(i64::from(window.limit()));
    builder.push(" OFFSET ");
    builder.push_bind(offset);
    Ok(())
}
