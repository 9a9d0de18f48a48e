//! Filter predicate tree
//!
//! 将 URL 查询参数 `field[op]=value` 解析为谓词树

use serde::Serialize;

/// 比较操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
}

impl Comparison {
    /// 识别操作符 token，只匹配完整的 key 段
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "gt" => Some(Self::Gt),
            "gte" => Some(Self::Gte),
            "lt" => Some(Self::Lt),
            "lte" => Some(Self::Lte),
            "in" => Some(Self::In),
            _ => None,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::In => "IN",
        }
    }
}

/// key 的一个段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySegment {
    Field(String),
    Operator(Comparison),
}

/// 单个过滤谓词（未经字段 schema 校验）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub segments: Vec<KeySegment>,
    pub value: String,
}

/// 谓词解析后的形态：字段路径 + 操作符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPredicate<'a> {
    pub path: String,
    pub comparison: Comparison,
    pub value: &'a str,
}

impl Predicate {
    /// 解析 `name[seg][seg]` 形式的 key
    ///
    /// 第一个段（字段名本身）永远不会被改写为操作符，
    /// 括号格式不完整时整个 key 视为字面字段名
    pub fn parse(key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        let segments = match split_key(key) {
            Some((base, rest)) => {
                let mut segments = vec![KeySegment::Field(base.to_string())];
                for segment in rest.into_iter().filter(|s| !s.is_empty()) {
                    segments.push(match Comparison::from_token(segment) {
                        Some(op) => KeySegment::Operator(op),
                        None => KeySegment::Field(segment.to_string()),
                    });
                }
                segments
            }
            None => vec![KeySegment::Field(key.to_string())],
        };

        Self { segments, value }
    }

    /// 顶层字段名
    pub fn base_name(&self) -> Option<&str> {
        match self.segments.first() {
            Some(KeySegment::Field(name)) => Some(name),
            _ => None,
        }
    }

    /// 解析为 (字段路径, 操作符)
    ///
    /// 操作符只允许出现在最后一个段，否则返回 None
    pub fn resolve(&self) -> Option<ResolvedPredicate<'_>> {
        let (comparison, fields) = match self.segments.split_last() {
            Some((KeySegment::Operator(op), rest)) => (*op, rest),
            Some(_) => (Comparison::Eq, self.segments.as_slice()),
            None => return None,
        };

        let mut parts = Vec::with_capacity(fields.len());
        for segment in fields {
            match segment {
                KeySegment::Field(name) => parts.push(name.as_str()),
                KeySegment::Operator(_) => return None,
            }
        }
        if parts.is_empty() {
            return None;
        }

        Some(ResolvedPredicate {
            path: parts.join("."),
            comparison,
            value: &self.value,
        })
    }

    /// `in` 操作的取值列表（逗号分隔）
    pub fn list_values(value: &str) -> Vec<&str> {
        value
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect()
    }
}

/// 拆分 `base[a][b]`，格式不合法返回 None
fn split_key(key: &str) -> Option<(&str, Vec<&str>)> {
    let open = match key.find('[') {
        Some(idx) => idx,
        None => return if key.contains(']') { None } else { Some((key, Vec::new())) },
    };
    let base = &key[..open];
    if base.is_empty() || base.contains(']') {
        return None;
    }

    let mut rest = &key[open..];
    let mut segments = Vec::new();
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let close = inner.find(']')?;
        let segment = &inner[..close];
        if segment.contains('[') {
            return None;
        }
        segments.push(segment);
        rest = &inner[close + 1..];
    }

    Some((base, segments))
}

/// 过滤条件（所有谓词 AND 组合）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub predicates: Vec<Predicate>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_operator_is_rewritten() {
        let predicate = Predicate::parse("age[gte]", "18");
        assert_eq!(
            predicate.segments,
            vec![
                KeySegment::Field("age".to_string()),
                KeySegment::Operator(Comparison::Gte)
            ]
        );

        let resolved = predicate.resolve().unwrap();
        assert_eq!(resolved.path, "age");
        assert_eq!(resolved.comparison, Comparison::Gte);
        assert_eq!(resolved.value, "18");
    }

    #[test]
    fn test_bare_field_named_like_operator_is_not_rewritten() {
        let predicate = Predicate::parse("gte", "5");
        let resolved = predicate.resolve().unwrap();
        assert_eq!(resolved.path, "gte");
        assert_eq!(resolved.comparison, Comparison::Eq);
    }

    #[test]
    fn test_operator_token_only_matches_whole_segment() {
        let predicate = Predicate::parse("averageCost[gtx]", "100");
        let resolved = predicate.resolve().unwrap();
        assert_eq!(resolved.path, "averageCost.gtx");
        assert_eq!(resolved.comparison, Comparison::Eq);

        let predicate = Predicate::parse("linting", "yes");
        assert_eq!(predicate.resolve().unwrap().path, "linting");
    }

    #[test]
    fn test_nested_field_path() {
        let predicate = Predicate::parse("location[city]", "Boston");
        let resolved = predicate.resolve().unwrap();
        assert_eq!(resolved.path, "location.city");
        assert_eq!(resolved.comparison, Comparison::Eq);

        let predicate = Predicate::parse("location[zipcode][in]", "02118,02119");
        let resolved = predicate.resolve().unwrap();
        assert_eq!(resolved.path, "location.zipcode");
        assert_eq!(resolved.comparison, Comparison::In);
    }

    #[test]
    fn test_operator_in_middle_does_not_resolve() {
        let predicate = Predicate::parse("age[gt][lt]", "3");
        assert!(predicate.resolve().is_none());
    }

    #[test]
    fn test_malformed_brackets_kept_literal() {
        let predicate = Predicate::parse("age[gte", "18");
        assert_eq!(predicate.segments, vec![KeySegment::Field("age[gte".to_string())]);

        let predicate = Predicate::parse("[gt]", "1");
        assert_eq!(predicate.segments, vec![KeySegment::Field("[gt]".to_string())]);
    }

    #[test]
    fn test_empty_bracket_is_skipped() {
        let predicate = Predicate::parse("careers[]", "Business");
        let resolved = predicate.resolve().unwrap();
        assert_eq!(resolved.path, "careers");
        assert_eq!(resolved.comparison, Comparison::Eq);
    }

    #[test]
    fn test_list_values() {
        assert_eq!(
            Predicate::list_values("Business, UI/UX,,Other"),
            vec!["Business", "UI/UX", "Other"]
        );
    }
}
