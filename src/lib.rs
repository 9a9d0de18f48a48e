//! DevCamper - Bootcamp / Course 目录服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Bootcamp Context: Bootcamp 实体、地理位置
//! - Course Context: 课程实体
//! - Query: 查询参数解析（过滤 / 投影 / 排序 / 分页）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Repositories, Geocoder, PhotoStorage）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储
//! - Adapters: HTTP Geocoder, 文件存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
