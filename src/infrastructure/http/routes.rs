//! HTTP Routes
//!
//! API Endpoints:
//! - /api/v1/ping                                  GET         健康检查
//! - /api/v1/bootcamps                             GET, POST   列表 / 创建
//! - /api/v1/bootcamps/condition                   GET         过滤 / 排序 / 分页 / 投影
//! - /api/v1/bootcamps/radius/:zipcode/:distance   GET         半径查询
//! - /api/v1/bootcamps/:id                         GET, PUT, DELETE
//! - /api/v1/bootcamps/:id/photo                   PUT         上传照片 (multipart, 字段 file)
//! - /api/v1/bootcamps/:id/courses                 GET, POST   某 Bootcamp 的课程
//! - /api/v1/courses                               GET, POST
//! - /api/v1/courses/:id                           GET, PUT, DELETE

use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use super::error::ApiError;
use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api/v1", api_routes())
        .fallback(route_not_found)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/bootcamps", bootcamp_routes())
        .nest("/courses", course_routes())
}

/// Bootcamp 路由
fn bootcamp_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_bootcamps).post(handlers::create_bootcamp),
        )
        .route("/condition", get(handlers::list_bootcamps_by_condition))
        .route(
            "/radius/:zipcode/:distance",
            get(handlers::get_bootcamps_in_radius),
        )
        .route(
            "/:id",
            get(handlers::get_bootcamp)
                .put(handlers::update_bootcamp)
                .delete(handlers::delete_bootcamp),
        )
        .route("/:id/photo", put(handlers::upload_bootcamp_photo))
        .route(
            "/:id/courses",
            get(handlers::list_bootcamp_courses).post(handlers::create_bootcamp_course),
        )
}

/// Course 路由
fn course_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_courses).post(handlers::create_course))
        .route(
            "/:id",
            get(handlers::get_course)
                .put(handlers::update_course)
                .delete(handlers::delete_course),
        )
}
