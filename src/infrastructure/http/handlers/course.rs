//! Course HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{
    parse_record_id, ApplicationError, CourseView, CreateCourse, DeleteCourse, GetCourse,
    ListCourses, UpdateCourse,
};
use crate::domain::course::Course;
use crate::domain::ValidationErrors;
use crate::infrastructure::http::dto::{ApiResponse, CourseRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出所有课程
pub async fn list_courses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<CourseView>>>, ApiError> {
    let courses = state
        .list_courses_handler
        .handle(ListCourses { bootcamp_id: None })
        .await?;
    Ok(Json(ApiResponse::list(courses)))
}

/// 列出某个 Bootcamp 的课程
pub async fn list_bootcamp_courses(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<CourseView>>>, ApiError> {
    let bootcamp_id = parse_record_id(&id)?;
    let courses = state
        .list_courses_handler
        .handle(ListCourses {
            bootcamp_id: Some(bootcamp_id),
        })
        .await?;
    Ok(Json(ApiResponse::list(courses)))
}

/// 获取单个课程
pub async fn get_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CourseView>>, ApiError> {
    let course_id = parse_record_id(&id)?;
    let course = state
        .get_course_handler
        .handle(GetCourse { course_id })
        .await?;
    Ok(Json(ApiResponse::success(course)))
}

/// 在路径指定的 Bootcamp 下创建课程
pub async fn create_bootcamp_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Course>>), ApiError> {
    let bootcamp_id = parse_record_id(&id)?;
    let Json(req) = payload?;
    let (_, changes) = req.into_parts();

    let course = state
        .create_course_handler
        .handle(CreateCourse {
            bootcamp_id,
            changes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(course))))
}

/// 创建课程，所属 Bootcamp 由请求体的 `bootcamp` 字段指定
pub async fn create_course(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Course>>), ApiError> {
    let Json(req) = payload?;
    let (bootcamp, changes) = req.into_parts();

    let bootcamp = bootcamp.ok_or_else(|| {
        let mut errors = ValidationErrors::new();
        errors.push("Please add a bootcamp");
        ApplicationError::from(errors)
    })?;
    let bootcamp_id = parse_record_id(&bootcamp)?;

    let course = state
        .create_course_handler
        .handle(CreateCourse {
            bootcamp_id,
            changes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(course))))
}

/// 更新课程
pub async fn update_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Course>>, ApiError> {
    let course_id = parse_record_id(&id)?;
    let Json(req) = payload?;
    let (_, changes) = req.into_parts();

    let course = state
        .update_course_handler
        .handle(UpdateCourse { course_id, changes })
        .await?;

    Ok(Json(ApiResponse::success(course)))
}

/// 删除课程
pub async fn delete_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let course_id = parse_record_id(&id)?;
    let course = state
        .delete_course_handler
        .handle(DeleteCourse { course_id })
        .await?;

    Ok(Json(ApiResponse::message(format!(
        "Success delete data {}",
        course.title
    ))))
}
