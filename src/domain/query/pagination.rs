//! Pagination window and metadata

use serde::Serialize;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 25;

/// 分页窗口
///
/// 不变量: page >= 1, limit > 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: u32,
    limit: u32,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageWindow {
    /// 非正数回落到默认值
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// 从原始查询参数构造
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            page.and_then(parse_leading_int).unwrap_or(DEFAULT_PAGE),
            limit.and_then(parse_leading_int).unwrap_or(DEFAULT_LIMIT),
        )
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// (page - 1) * limit
    pub fn start_index(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// page * limit
    pub fn end_index(&self) -> u64 {
        u64::from(self.page) * u64::from(self.limit)
    }
}

/// 解析前导十进制数字，如 "2abc" -> 2；无数字或溢出返回 None
fn parse_leading_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: &str = {
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        &trimmed[..end]
    };
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// 相邻页描述
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRef {
    pub page: u32,
    pub limit: u32,
}

/// 分页元数据
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageRef>,
}

impl Pagination {
    /// next 当且仅当 end < total；prev 当且仅当 start > 0
    pub fn compute(window: &PageWindow, total: u64) -> Self {
        let next = (window.end_index() < total).then(|| PageRef {
            page: window.page() + 1,
            limit: window.limit(),
        });
        let prev = (window.start_index() > 0).then(|| PageRef {
            page: window.page() - 1,
            limit: window.limit(),
        });

        Self { next, prev }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let window = PageWindow::parse(None, None);
        assert_eq!(window.page(), 1);
        assert_eq!(window.limit(), 25);
        assert_eq!(window.start_index(), 0);
        assert_eq!(window.end_index(), 25);
    }

    #[test]
    fn test_parse_non_numeric_and_non_positive() {
        assert_eq!(PageWindow::parse(Some("abc"), Some("")), PageWindow::default());
        assert_eq!(PageWindow::parse(Some("0"), Some("0")), PageWindow::default());
        assert_eq!(PageWindow::parse(Some("-3"), Some("-1")), PageWindow::default());
        assert_eq!(
            PageWindow::parse(Some("99999999999999"), None),
            PageWindow::default()
        );
    }

    #[test]
    fn test_parse_leading_digits() {
        let window = PageWindow::parse(Some("2abc"), Some(" 10"));
        assert_eq!(window.page(), 2);
        assert_eq!(window.limit(), 10);
        assert_eq!(window.start_index(), 10);
        assert_eq!(window.end_index(), 20);
    }

    #[test]
    fn test_pagination_middle_page() {
        let pagination = Pagination::compute(&PageWindow::new(2, 10), 25);
        assert_eq!(pagination.prev, Some(PageRef { page: 1, limit: 10 }));
        assert_eq!(pagination.next, Some(PageRef { page: 3, limit: 10 }));
    }

    #[test]
    fn test_pagination_last_page_exact_fit() {
        let pagination = Pagination::compute(&PageWindow::new(3, 10), 30);
        assert_eq!(pagination.next, None);
        assert_eq!(pagination.prev, Some(PageRef { page: 2, limit: 10 }));
    }

    #[test]
    fn test_next_prev_presence_holds_for_all_triples() {
        for page in 1..=6u32 {
            for limit in 1..=7u32 {
                for total in 0..=40u64 {
                    let window = PageWindow::new(page, limit);
                    let pagination = Pagination::compute(&window, total);
                    let end = u64::from(page * limit);
                    let start = u64::from((page - 1) * limit);
                    assert_eq!(pagination.next.is_some(), end < total);
                    assert_eq!(pagination.prev.is_some(), start > 0);
                }
            }
        }
    }

    #[test]
    fn test_empty_pagination_serializes_as_empty_object() {
        let json = serde_json::to_value(Pagination::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
