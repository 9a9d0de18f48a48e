//! SQLite Persistence - SQLite 数据库持久化实现

mod bootcamp_repo;
mod course_repo;
mod database;
mod query_compiler;

pub use bootcamp_repo::*;
pub use course_repo::*;
pub use database::*;
