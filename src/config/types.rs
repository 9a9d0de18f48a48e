//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// 上传存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 地理编码服务配置
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 单个请求的超时时间（秒）
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// 数据库文件路径
    #[serde(default = "default_db_path")]
    pub path: String,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_path() -> String {
    "data/devcamper.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// 获取数据库 URL
    pub fn database_url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.path)
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 照片上传目录
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// 上传文件最大大小（字节）
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: u64,

    /// 上传目录对外托管的 URL 前缀
    #[serde(default = "default_upload_url_path")]
    pub upload_url_path: String,
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("public/uploads")
}

fn default_max_upload_size() -> u64 {
    1_000_000
}

fn default_upload_url_path() -> String {
    "/uploads".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            max_upload_size: default_max_upload_size(),
            upload_url_path: default_upload_url_path(),
        }
    }
}

/// 地理编码服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct GeocoderConfig {
    /// 服务基础 URL
    #[serde(default = "default_geocoder_url")]
    pub url: String,

    /// API key
    #[serde(default)]
    pub api_key: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_geocoder_timeout")]
    pub timeout_secs: u64,
}

fn default_geocoder_url() -> String {
    "https://www.mapquestapi.com".to_string()
}

fn default_geocoder_timeout() -> u64 {
    10
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            url: default_geocoder_url(),
            api_key: String::new(),
            timeout_secs: default_geocoder_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LogConfig {
    /// 默认的 EnvFilter 指令，RUST_LOG 优先
    pub fn filter_directive(&self) -> String {
        format!(
            "{level},devcamper={level},tower_http=debug",
            level = self.level
        )
    }
}
