//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::{BoxError, Router};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use tokio::net::TcpListener;
use tower::timeout::error::Elapsed;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::error::ApiError;
use super::middleware::error_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;

/// multipart 边界和其他字段预留的额外空间
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 单个请求超时
    pub request_timeout: Duration,
    /// 请求体上限（字节）
    pub body_limit: usize,
    /// 上传目录及其 URL 前缀
    pub upload_dir: PathBuf,
    pub upload_url_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            request_timeout: Duration::from_secs(30),
            body_limit: 1_000_000 + MULTIPART_OVERHEAD,
            upload_dir: PathBuf::from("public/uploads"),
            upload_url_path: "/uploads".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// 请求体上限 = 照片上限 + multipart 预留
    pub fn with_max_upload_size(mut self, max_upload_size: u64) -> Self {
        let max = usize::try_from(max_upload_size).unwrap_or(usize::MAX);
        self.body_limit = max.saturating_add(MULTIPART_OVERHEAD);
        self
    }

    pub fn with_uploads(mut self, dir: impl Into<PathBuf>, url_path: impl Into<String>) -> Self {
        self.upload_dir = dir.into();
        self.upload_url_path = url_path.into();
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 超时和其他中间件错误统一转为 ApiError
async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::internal(format!("Unhandled middleware error: {}", err))
    }
}

/// 构建完整 Router（路由 + 中间件 + 静态上传目录）
pub fn build_router(config: &ServerConfig, state: Arc<AppState>) -> Router {
    // CORS 配置 - 允许所有来源的跨域请求
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let timeout = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .layer(TimeoutLayer::new(config.request_timeout));

    create_routes()
        .nest_service(&config.upload_url_path, ServeDir::new(&config.upload_dir))
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(timeout)
        .layer(middleware::from_fn(error_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 启动服务器
    pub async fn run(self) -> Result<(), std::io::Error> {
        let router = build_router(&self.config, self.state.clone());
        let addr = self.config.addr();

        info!("Starting HTTP server on {}", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = build_router(&self.config, self.state.clone());
        let addr = self.config.addr();

        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}
