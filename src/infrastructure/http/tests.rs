//! 端到端测试：Router + 内存 SQLite + 假地理编码

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tower::util::ServiceExt;
use uuid::Uuid;

use super::{build_router, AppState, ServerConfig};
use crate::application::{
    GeocodeError, GeocodedLocation, GeocoderPort, PhotoStorageError, PhotoStoragePort,
};
use crate::domain::bootcamp::{Bootcamp, BootcampChanges, GeoPoint, Location, DEFAULT_PHOTO};
use crate::infrastructure::adapters::FilePhotoStorage;
use crate::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteBootcampRepository,
    SqliteCourseRepository,
};

const MAX_UPLOAD: u64 = 64;
const BOSTON: (f64, f64) = (-71.104081, 42.350846);

#[derive(Default)]
struct FakeGeocoder {
    entries: HashMap<String, GeocodedLocation>,
    delay: Option<Duration>,
}

impl FakeGeocoder {
    fn with(mut self, query: &str, (longitude, latitude): (f64, f64)) -> Self {
        self.entries.insert(
            query.to_string(),
            GeocodedLocation {
                latitude,
                longitude,
                formatted_address: Some(format!("{query}, US")),
                street: None,
                city: Some("Boston".to_string()),
                state: Some("MA".to_string()),
                zipcode: Some("02215".to_string()),
                country: Some("US".to_string()),
            },
        );
        self
    }

    fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl GeocoderPort for FakeGeocoder {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodedLocation>, GeocodeError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.entries.get(query).cloned().into_iter().collect())
    }
}

struct FailingStorage;

#[async_trait]
impl PhotoStoragePort for FailingStorage {
    async fn save(&self, _file_name: &str, _data: &[u8]) -> Result<PathBuf, PhotoStorageError> {
        Err(PhotoStorageError::IoError("disk full".to_string()))
    }
}

struct TestApp {
    router: Router,
    state: Arc<AppState>,
    uploads: TempDir,
}

impl TestApp {
    async fn new() -> Self {
        Self::build(default_geocoder(), None, Duration::from_secs(5)).await
    }

    async fn build(
        geocoder: FakeGeocoder,
        storage: Option<Arc<dyn PhotoStoragePort>>,
        timeout: Duration,
    ) -> Self {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let uploads = tempfile::tempdir().unwrap();
        let storage: Arc<dyn PhotoStoragePort> = match storage {
            Some(storage) => storage,
            None => Arc::new(FilePhotoStorage::new(uploads.path()).await.unwrap()),
        };

        let state = Arc::new(AppState::new(
            Arc::new(SqliteBootcampRepository::new(pool.clone())),
            Arc::new(SqliteCourseRepository::new(pool)),
            Arc::new(geocoder),
            storage,
            MAX_UPLOAD,
        ));
        let config = ServerConfig::default()
            .with_request_timeout(timeout)
            .with_max_upload_size(MAX_UPLOAD)
            .with_uploads(uploads.path(), "/uploads");

        Self {
            router: build_router(&config, state.clone()),
            state,
            uploads,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(empty_request(Method::GET, uri)).await
    }

    /// 直接写库，绕过地理编码
    async fn seed(&self, name: &str, cost: f64, point: Option<(f64, f64)>) -> Bootcamp {
        let mut bootcamp = Bootcamp::create(BootcampChanges {
            name: Some(name.to_string()),
            description: Some(format!("{name} description")),
            average_cost: Some(cost),
            ..Default::default()
        })
        .unwrap();
        bootcamp.location = point.map(|(lng, lat)| Location::at(GeoPoint::new(lng, lat)));
        self.state.bootcamp_repo.insert(&bootcamp).await.unwrap();
        bootcamp
    }
}

fn default_geocoder() -> FakeGeocoder {
    FakeGeocoder::default()
        .with("233 Bay State Rd Boston MA 02215", BOSTON)
        .with("02118", (-71.07, 42.34))
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn photo_request(uri: &str, field: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    let boundary = "devcamper-test-boundary";
    let mut body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"camp.jpg\"\r\nContent-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn course_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Learn the basics",
        "weeks": "8",
        "tuition": 8000,
        "minimumSkill": "beginner",
        "scholarshipAvailable": true
    })
}

// ============================================================================
// Routing
// ============================================================================

#[tokio::test]
async fn test_ping() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/api/v1/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/api/v1/nothing-here").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "error": "Route not found"}));
}

// ============================================================================
// Bootcamp CRUD
// ============================================================================

#[tokio::test]
async fn test_create_bootcamp_geocodes_address() {
    let app = TestApp::new().await;
    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/v1/bootcamps",
            json!({
                "name": "Devworks Bootcamp",
                "description": "Full stack web development",
                "address": "233 Bay State Rd Boston MA 02215",
                "careers": ["Web Development", "UI/UX"],
                "housing": true
            }),
        ))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert_eq!(data["name"], "Devworks Bootcamp");
    assert_eq!(data["photo"], DEFAULT_PHOTO);
    assert_eq!(data["location"]["type"], "Point");
    assert_eq!(data["location"]["coordinates"], json!([BOSTON.0, BOSTON.1]));
    assert_eq!(data["location"]["city"], "Boston");

    let id = data["id"].as_str().unwrap();
    let (status, body) = app.get(&format!("/api/v1/bootcamps/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["courses"], json!([]));
    assert_eq!(body["data"]["careers"], json!(["Web Development", "UI/UX"]));
}

#[tokio::test]
async fn test_create_bootcamp_validation_messages_joined() {
    let app = TestApp::new().await;
    let (status, body) = app
        .send(json_request(Method::POST, "/api/v1/bootcamps", json!({})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Please add a name, Please add a description");
}

#[tokio::test]
async fn test_create_bootcamp_unknown_address() {
    let app = TestApp::new().await;
    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/v1/bootcamps",
            json!({"name": "A", "description": "B", "address": "nowhere"}),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please add a valid address");
}

#[tokio::test]
async fn test_duplicate_name_rejected() {
    let app = TestApp::new().await;
    app.seed("Devworks", 1.0, None).await;

    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/v1/bootcamps",
            json!({"name": "Devworks", "description": "again"}),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Duplicate field value entered");
}

#[tokio::test]
async fn test_malformed_json_body() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/bootcamps")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_update_bootcamp() {
    let app = TestApp::new().await;
    let bootcamp = app.seed("Devworks", 1.0, None).await;

    let (status, body) = app
        .send(json_request(
            Method::PUT,
            &format!("/api/v1/bootcamps/{}", bootcamp.id),
            json!({"averageCost": 12000, "jobGuarantee": true}),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Devworks");
    assert_eq!(body["data"]["averageCost"], 12000.0);
    assert_eq!(body["data"]["jobGuarantee"], true);

    let (status, body) = app
        .send(json_request(
            Method::PUT,
            &format!("/api/v1/bootcamps/{}", bootcamp.id),
            json!({"averageRating": 11}),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Rating can not be more than 10");

    let missing = Uuid::new_v4();
    let (status, body) = app
        .send(json_request(
            Method::PUT,
            &format!("/api/v1/bootcamps/{missing}"),
            json!({"name": "X"}),
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        format!("Bootcamp not found with id of {missing}")
    );
}

#[tokio::test]
async fn test_delete_missing_bootcamp() {
    let app = TestApp::new().await;
    let missing = Uuid::new_v4();

    let (status, body) = app
        .send(empty_request(
            Method::DELETE,
            &format!("/api/v1/bootcamps/{missing}"),
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"success": false, "error": format!("Bootcamp not found with id of {missing}")})
    );
}

#[tokio::test]
async fn test_malformed_id_is_not_found() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/api/v1/bootcamps/5d713995b721c3bb38c1f5d0").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "Resource not found with id of 5d713995b721c3bb38c1f5d0"
    );
}

#[tokio::test]
async fn test_delete_bootcamp_cascades_courses() {
    let app = TestApp::new().await;
    let bootcamp = app.seed("Devworks", 1.0, None).await;
    let (status, _) = app
        .send(json_request(
            Method::POST,
            &format!("/api/v1/bootcamps/{}/courses", bootcamp.id),
            course_body("Front End"),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .send(empty_request(
            Method::DELETE,
            &format!("/api/v1/bootcamps/{}", bootcamp.id),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Success delete data Devworks"})
    );

    let (_, body) = app.get("/api/v1/courses").await;
    assert_eq!(body["count"], 0);
}

// ============================================================================
// Query builder
// ============================================================================

#[tokio::test]
async fn test_condition_select_sort_and_page() {
    let app = TestApp::new().await;
    for i in 0..25 {
        app.seed(&format!("Bootcamp {i:02}"), i as f64 * 1000.0, None)
            .await;
    }

    let (status, body) = app
        .get("/api/v1/bootcamps/condition?select=name,description&sort=-createdAt&page=2&limit=10")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 10);
    assert_eq!(body["pagination"]["prev"], json!({"page": 1, "limit": 10}));
    assert_eq!(body["pagination"]["next"], json!({"page": 3, "limit": 10}));

    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 10);
    for record in records {
        let mut keys: Vec<_> = record.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["description", "id", "name"]);
    }

    // 最后一页只有 prev；总数不受过滤影响
    let (_, body) = app
        .get("/api/v1/bootcamps/condition?page=3&limit=10")
        .await;
    assert_eq!(body["count"], 5);
    assert!(body["pagination"].get("next").is_none());
    assert_eq!(body["pagination"]["prev"], json!({"page": 2, "limit": 10}));
}

#[tokio::test]
async fn test_condition_operator_filter() {
    let app = TestApp::new().await;
    app.seed("Cheap", 5000.0, None).await;
    app.seed("Mid", 10000.0, None).await;
    app.seed("Pricey", 15000.0, None).await;

    let (status, body) = app
        .get("/api/v1/bootcamps/condition?averageCost%5Bgte%5D=10000&sort=averageCost")
        .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Mid", "Pricey"]);

    // 未知字段不匹配任何记录
    let (_, body) = app.get("/api/v1/bootcamps/condition?gte=1").await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_condition_populates_courses_unless_excluded() {
    let app = TestApp::new().await;
    let bootcamp = app.seed("Devworks", 1.0, None).await;
    app.send(json_request(
        Method::POST,
        &format!("/api/v1/bootcamps/{}/courses", bootcamp.id),
        course_body("Front End"),
    ))
    .await;

    let (_, body) = app.get("/api/v1/bootcamps/condition").await;
    assert_eq!(body["data"][0]["courses"][0]["title"], "Front End");

    let (_, body) = app.get("/api/v1/bootcamps/condition?select=name").await;
    assert!(body["data"][0].get("courses").is_none());
}

#[tokio::test]
async fn test_condition_bad_cast_is_server_error() {
    let app = TestApp::new().await;
    app.seed("Devworks", 1.0, None).await;

    let (status, body) = app
        .get("/api/v1/bootcamps/condition?averageCost%5Bgt%5D=cheap")
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"success": false, "error": "Server Error"}));
}

// ============================================================================
// Radius
// ============================================================================

#[tokio::test]
async fn test_radius_query() {
    let app = TestApp::new().await;
    let near = app.seed("Near", 1.0, Some(BOSTON)).await;
    app.seed("Far", 1.0, Some((-118.24, 34.05))).await;
    app.seed("Nowhere", 1.0, None).await;

    let uri = "/api/v1/bootcamps/radius/02118/10";
    let (status, first) = app.get(uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["count"], 1);
    assert_eq!(first["data"][0]["id"], near.id.to_string());

    let (_, second) = app.get(uri).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_radius_rejects_bad_input() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/bootcamps/radius/02118/far").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please provide a valid distance");

    let (status, _) = app.get("/api/v1/bootcamps/radius/02118/-5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.get("/api/v1/bootcamps/radius/99999/10").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No location found for zipcode 99999");
}

#[tokio::test]
async fn test_request_timeout() {
    let geocoder = default_geocoder().delayed(Duration::from_millis(500));
    let app = TestApp::build(geocoder, None, Duration::from_millis(50)).await;

    let (status, body) = app.get("/api/v1/bootcamps/radius/02118/10").await;
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["error"], "Request timed out");
}

// ============================================================================
// Courses
// ============================================================================

#[tokio::test]
async fn test_create_course_for_missing_bootcamp() {
    let app = TestApp::new().await;
    let missing = Uuid::new_v4();

    let (status, body) = app
        .send(json_request(
            Method::POST,
            &format!("/api/v1/bootcamps/{missing}/courses"),
            course_body("Orphan"),
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        format!("No bootcamp with the id of {missing}")
    );

    let (_, body) = app.get("/api/v1/courses").await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_create_course_from_body_field() {
    let app = TestApp::new().await;
    let bootcamp = app.seed("Devworks", 1.0, None).await;

    let mut payload = course_body("Back End");
    payload["bootcamp"] = json!(bootcamp.id.to_string());
    let (status, body) = app
        .send(json_request(Method::POST, "/api/v1/courses", payload))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["bootcamp"], bootcamp.id.to_string());

    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/v1/courses",
            course_body("No owner"),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please add a bootcamp");
}

#[tokio::test]
async fn test_course_validation() {
    let app = TestApp::new().await;
    let bootcamp = app.seed("Devworks", 1.0, None).await;

    let (status, body) = app
        .send(json_request(
            Method::POST,
            &format!("/api/v1/bootcamps/{}/courses", bootcamp.id),
            json!({"title": "Front End", "minimumSkill": "expert"}),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Please add a description, Please add number of weeks, Please add a tuition cost, `expert` is not a valid minimum skill"
    );
}

#[tokio::test]
async fn test_course_lifecycle() {
    let app = TestApp::new().await;
    let bootcamp = app.seed("Devworks", 1.0, None).await;

    let (_, body) = app
        .send(json_request(
            Method::POST,
            &format!("/api/v1/bootcamps/{}/courses", bootcamp.id),
            course_body("Front End"),
        ))
        .await;
    let course_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app.get(&format!("/api/v1/courses/{course_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["bootcamp"]["name"], "Devworks");
    assert_eq!(body["data"]["minimumSkill"], "beginner");

    let (_, body) = app
        .get(&format!("/api/v1/bootcamps/{}/courses", bootcamp.id))
        .await;
    assert_eq!(body["count"], 1);

    let (status, body) = app
        .send(json_request(
            Method::PUT,
            &format!("/api/v1/courses/{course_id}"),
            json!({"tuition": 9500, "weeks": 10}),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tuition"], 9500.0);
    assert_eq!(body["data"]["weeks"], "10");

    let (status, body) = app
        .send(empty_request(
            Method::DELETE,
            &format!("/api/v1/courses/{course_id}"),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Success delete data Front End");

    let (status, body) = app.get(&format!("/api/v1/courses/{course_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        format!("No course with the id of {course_id}")
    );
}

// ============================================================================
// Photo upload
// ============================================================================

#[tokio::test]
async fn test_upload_non_image_keeps_photo() {
    let app = TestApp::new().await;
    let bootcamp = app.seed("Devworks", 1.0, None).await;
    let uri = format!("/api/v1/bootcamps/{}/photo", bootcamp.id);

    let (status, body) = app
        .send(photo_request(&uri, "file", "text/plain", b"hello"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please upload an image");

    let stored = app
        .state
        .bootcamp_repo
        .find_by_id(bootcamp.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.photo, DEFAULT_PHOTO);
}

#[tokio::test]
async fn test_upload_image_and_serve() {
    let app = TestApp::new().await;
    let bootcamp = app.seed("Devworks", 1.0, None).await;
    let uri = format!("/api/v1/bootcamps/{}/photo", bootcamp.id);

    let (status, body) = app
        .send(photo_request(&uri, "file", "image/jpeg", b"jpegdata"))
        .await;
    let file_name = format!("photo_{}.jpg", bootcamp.id);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "data": file_name}));
    assert_eq!(
        std::fs::read(app.uploads.path().join(&file_name)).unwrap(),
        b"jpegdata"
    );

    let stored = app
        .state
        .bootcamp_repo
        .find_by_id(bootcamp.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.photo, file_name);

    let response = app
        .router
        .clone()
        .oneshot(empty_request(Method::GET, &format!("/uploads/{file_name}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_upload_check_order() {
    let app = TestApp::new().await;

    // 记录不存在优先于文件校验
    let missing = Uuid::new_v4();
    let (status, _) = app
        .send(photo_request(
            &format!("/api/v1/bootcamps/{missing}/photo"),
            "file",
            "text/plain",
            b"x",
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let bootcamp = app.seed("Devworks", 1.0, None).await;
    let uri = format!("/api/v1/bootcamps/{}/photo", bootcamp.id);

    let (status, body) = app
        .send(photo_request(&uri, "other", "image/png", b"x"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please upload a file");

    let (status, body) = app.send(empty_request(Method::PUT, &uri)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please upload a file");

    let big = vec![0u8; MAX_UPLOAD as usize + 1];
    let (status, body) = app.send(photo_request(&uri, "file", "image/png", &big)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        format!("Please upload an image less than {MAX_UPLOAD}")
    );
}

#[tokio::test]
async fn test_upload_storage_failure() {
    let app = TestApp::build(
        default_geocoder(),
        Some(Arc::new(FailingStorage)),
        Duration::from_secs(5),
    )
    .await;
    let bootcamp = app.seed("Devworks", 1.0, None).await;

    let (status, body) = app
        .send(photo_request(
            &format!("/api/v1/bootcamps/{}/photo", bootcamp.id),
            "file",
            "image/jpeg",
            b"jpeg",
        ))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Problem with file upload");
}
