//! DevCamper - Bootcamp / Course 目录服务
//!
//! - Domain: bootcamp/, course/, query/
//! - Application: commands, queries, ports
//! - Infrastructure: http, persistence, adapters

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use devcamper::config::{load_config, print_config};
use devcamper::infrastructure::adapters::{FilePhotoStorage, HttpGeocoder, HttpGeocoderConfig};
use devcamper::infrastructure::http::{AppState, HttpServer, ServerConfig};
use devcamper::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteBootcampRepository,
    SqliteCourseRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().context("Failed to load config")?;

    // 初始化日志
    let log_filter = config.log.filter_directive();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("DevCamper API");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config)
        .await
        .context("Failed to open database")?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let bootcamp_repo = Arc::new(SqliteBootcampRepository::new(pool.clone()));
    let course_repo = Arc::new(SqliteCourseRepository::new(pool));

    // 地理编码服务
    let geocoder_config = HttpGeocoderConfig::new(&config.geocoder.url, &config.geocoder.api_key)
        .with_timeout(config.geocoder.timeout_secs);
    let geocoder = Arc::new(HttpGeocoder::new(geocoder_config)?);

    // 照片存储（会创建上传目录）
    let photo_storage = Arc::new(FilePhotoStorage::new(&config.storage.upload_dir).await?);

    let state = AppState::new(
        bootcamp_repo,
        course_repo,
        geocoder,
        photo_storage,
        config.storage.max_upload_size,
    );

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_request_timeout(Duration::from_secs(config.server.request_timeout_secs))
        .with_max_upload_size(config.storage.max_upload_size)
        .with_uploads(
            config.storage.upload_dir.clone(),
            config.storage.upload_url_path.clone(),
        );

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Received shutdown signal"),
                Err(e) => {
                    // 无法监听信号时不触发关闭
                    tracing::error!(error = %e, "Failed to listen for ctrl-c");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
