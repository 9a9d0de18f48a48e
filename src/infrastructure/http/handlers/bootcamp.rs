//! Bootcamp HTTP Handlers

use axum::{
    extract::{
        multipart::MultipartRejection, rejection::JsonRejection, Multipart, Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::application::{
    parse_record_id, BootcampView, CreateBootcamp, DeleteBootcamp, FindBootcampsInRadius,
    GetBootcamp, ListBootcamps, ListBootcampsByCondition, PhotoPayload, PhotoUpload,
    UpdateBootcamp, UploadBootcampPhoto,
};
use crate::domain::bootcamp::Bootcamp;
use crate::infrastructure::http::dto::{ApiResponse, BootcampRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 照片上传使用的 multipart 字段名
const PHOTO_FIELD: &str = "file";

/// 列出所有 Bootcamp（含课程）
pub async fn list_bootcamps(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<BootcampView>>>, ApiError> {
    let bootcamps = state.list_bootcamps_handler.handle(ListBootcamps).await?;
    Ok(Json(ApiResponse::list(bootcamps)))
}

/// 条件查询：过滤 / 投影 / 排序 / 分页
pub async fn list_bootcamps_by_condition(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ApiResponse<Vec<Value>>>, ApiError> {
    let page = state
        .list_bootcamps_by_condition_handler
        .handle(ListBootcampsByCondition { params })
        .await?;

    Ok(Json(ApiResponse::page(page.records, page.pagination)))
}

/// 获取单个 Bootcamp
pub async fn get_bootcamp(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BootcampView>>, ApiError> {
    let bootcamp_id = parse_record_id(&id)?;
    let bootcamp = state
        .get_bootcamp_handler
        .handle(GetBootcamp { bootcamp_id })
        .await?;
    Ok(Json(ApiResponse::success(bootcamp)))
}

/// 创建 Bootcamp
pub async fn create_bootcamp(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BootcampRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Bootcamp>>), ApiError> {
    let Json(req) = payload?;

    let bootcamp = state
        .create_bootcamp_handler
        .handle(CreateBootcamp {
            changes: req.into(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(bootcamp))))
}

/// 更新 Bootcamp（部分字段）
pub async fn update_bootcamp(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<BootcampRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Bootcamp>>, ApiError> {
    let bootcamp_id = parse_record_id(&id)?;
    let Json(req) = payload?;

    let bootcamp = state
        .update_bootcamp_handler
        .handle(UpdateBootcamp {
            bootcamp_id,
            changes: req.into(),
        })
        .await?;

    Ok(Json(ApiResponse::success(bootcamp)))
}

/// 删除 Bootcamp（级联删除课程）
pub async fn delete_bootcamp(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let bootcamp_id = parse_record_id(&id)?;
    let bootcamp = state
        .delete_bootcamp_handler
        .handle(DeleteBootcamp { bootcamp_id })
        .await?;

    Ok(Json(ApiResponse::message(format!(
        "Success delete data {}",
        bootcamp.name
    ))))
}

/// 按邮编和距离（英里）查找
pub async fn get_bootcamps_in_radius(
    State(state): State<Arc<AppState>>,
    Path((zipcode, distance)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Vec<Bootcamp>>>, ApiError> {
    // 非数字按 NaN 交给 handler 统一拒绝
    let distance_miles = distance.trim().parse::<f64>().unwrap_or(f64::NAN);

    let bootcamps = state
        .find_in_radius_handler
        .handle(FindBootcampsInRadius {
            zipcode,
            distance_miles,
        })
        .await?;

    Ok(Json(ApiResponse::list(bootcamps)))
}

/// 读取 multipart 中的照片字段
async fn read_photo(multipart: Result<Multipart, MultipartRejection>) -> Result<PhotoPayload, ApiError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Photo request is not multipart");
            return Ok(PhotoPayload::Missing);
        }
    };

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(PhotoPayload::Missing),
            Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                return Ok(PhotoPayload::Oversized)
            }
            Err(e) => return Err(ApiError::BadRequest(e.body_text())),
        };

        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        return match field.bytes().await {
            Ok(data) => Ok(PhotoPayload::File(PhotoUpload {
                file_name,
                content_type,
                data: data.to_vec(),
            })),
            Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => Ok(PhotoPayload::Oversized),
            Err(e) => Err(ApiError::BadRequest(e.body_text())),
        };
    }
}

/// 上传 Bootcamp 照片
pub async fn upload_bootcamp_photo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let bootcamp_id = parse_record_id(&id)?;
    let payload = read_photo(multipart).await?;

    let file_name = state
        .upload_photo_handler
        .handle(UploadBootcampPhoto {
            bootcamp_id,
            payload,
        })
        .await?;

    Ok(Json(ApiResponse::success(file_name)))
}
