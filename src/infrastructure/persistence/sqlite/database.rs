//! SQLite Database - 数据库连接和迁移

use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};
use std::path::Path;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库连接 URL
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:./data/devcamper.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            database_url: format!("sqlite:{}?mode=rwc", path.as_ref().display()),
            max_connections: 5,
        }
    }

    /// 内存数据库只能使用单连接，否则每个连接各自一份数据
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    // 启用 WAL 模式，允许并发读写
    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await?;

    // 设置 busy_timeout=5000ms，遇到锁时等待而不是立即失败
    sqlx::query("PRAGMA busy_timeout=5000")
        .execute(&pool)
        .await?;

    // 课程随 Bootcamp 级联删除依赖外键
    sqlx::query("PRAGMA foreign_keys=ON")
        .execute(&pool)
        .await?;

    tracing::info!("SQLite pool created with WAL mode and foreign keys enabled");

    Ok(pool)
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    // 创建 bootcamps 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bootcamps (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            description TEXT NOT NULL,
            website TEXT,
            phone TEXT,
            email TEXT,
            address TEXT,
            location_longitude REAL,
            location_latitude REAL,
            location_formatted_address TEXT,
            location_street TEXT,
            location_city TEXT,
            location_state TEXT,
            location_zipcode TEXT,
            location_country TEXT,
            careers TEXT NOT NULL DEFAULT '[]',
            average_rating REAL,
            average_cost REAL,
            photo TEXT NOT NULL DEFAULT 'no-photo.jpg',
            housing INTEGER NOT NULL DEFAULT 0,
            job_assistance INTEGER NOT NULL DEFAULT 0,
            job_guarantee INTEGER NOT NULL DEFAULT 0,
            accept_gi INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 courses 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            id TEXT PRIMARY KEY,
            bootcamp_id TEXT NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            weeks TEXT NOT NULL,
            tuition REAL NOT NULL,
            minimum_skill TEXT NOT NULL,
            scholarship_available INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            FOREIGN KEY (bootcamp_id) REFERENCES bootcamps(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建索引
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_bootcamps_created_at
        ON bootcamps(created_at)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_courses_bootcamp_id
        ON courses(bootcamp_id)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}
