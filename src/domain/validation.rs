//! 字段校验错误（bootcamp / course 共享）

use thiserror::Error;

/// 字段校验失败，收集所有字段的错误信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .messages.join(", "))]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// 必填字符串：缺失或全空白时记录错误
    pub fn require<'a>(&mut self, value: Option<&'a str>, message: &str) -> Option<&'a str> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => Some(v),
            None => {
                self.push(message);
                None
            }
        }
    }

    /// 字符数上限
    pub fn max_chars(&mut self, value: Option<&str>, max: usize, message: &str) {
        if value.map_or(false, |v| v.chars().count() > max) {
            self.push(message);
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// 无错误时返回 Ok
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}
