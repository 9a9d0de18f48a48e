//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateBootcampHandler, CreateCourseHandler, DeleteBootcampHandler, DeleteCourseHandler,
    UpdateBootcampHandler, UpdateCourseHandler, UploadBootcampPhotoHandler,
    // Query handlers
    FindBootcampsInRadiusHandler, GetBootcampHandler, GetCourseHandler,
    ListBootcampsByConditionHandler, ListBootcampsHandler, ListCoursesHandler,
    // Ports
    BootcampRepositoryPort, CourseRepositoryPort, GeocoderPort, PhotoStoragePort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
    pub course_repo: Arc<dyn CourseRepositoryPort>,
    pub geocoder: Arc<dyn GeocoderPort>,
    pub photo_storage: Arc<dyn PhotoStoragePort>,

    // ========== Command Handlers ==========
    pub create_bootcamp_handler: CreateBootcampHandler,
    pub update_bootcamp_handler: UpdateBootcampHandler,
    pub delete_bootcamp_handler: DeleteBootcampHandler,
    pub upload_photo_handler: UploadBootcampPhotoHandler,
    pub create_course_handler: CreateCourseHandler,
    pub update_course_handler: UpdateCourseHandler,
    pub delete_course_handler: DeleteCourseHandler,

    // ========== Query Handlers ==========
    pub list_bootcamps_handler: ListBootcampsHandler,
    pub list_bootcamps_by_condition_handler: ListBootcampsByConditionHandler,
    pub get_bootcamp_handler: GetBootcampHandler,
    pub find_in_radius_handler: FindBootcampsInRadiusHandler,
    pub list_courses_handler: ListCoursesHandler,
    pub get_course_handler: GetCourseHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        bootcamp_repo: Arc<dyn BootcampRepositoryPort>,
        course_repo: Arc<dyn CourseRepositoryPort>,
        geocoder: Arc<dyn GeocoderPort>,
        photo_storage: Arc<dyn PhotoStoragePort>,
        max_upload_size: u64,
    ) -> Self {
        Self {
            // Ports
            bootcamp_repo: bootcamp_repo.clone(),
            course_repo: course_repo.clone(),
            geocoder: geocoder.clone(),
            photo_storage: photo_storage.clone(),

            // Command handlers
            create_bootcamp_handler: CreateBootcampHandler::new(
                bootcamp_repo.clone(),
                geocoder.clone(),
            ),
            update_bootcamp_handler: UpdateBootcampHandler::new(
                bootcamp_repo.clone(),
                geocoder.clone(),
            ),
            delete_bootcamp_handler: DeleteBootcampHandler::new(bootcamp_repo.clone()),
            upload_photo_handler: UploadBootcampPhotoHandler::new(
                bootcamp_repo.clone(),
                photo_storage.clone(),
                max_upload_size,
            ),
            create_course_handler: CreateCourseHandler::new(
                bootcamp_repo.clone(),
                course_repo.clone(),
            ),
            update_course_handler: UpdateCourseHandler::new(course_repo.clone()),
            delete_course_handler: DeleteCourseHandler::new(course_repo.clone()),

            // Query handlers
            list_bootcamps_handler: ListBootcampsHandler::new(
                bootcamp_repo.clone(),
                course_repo.clone(),
            ),
            list_bootcamps_by_condition_handler: ListBootcampsByConditionHandler::new(
                bootcamp_repo.clone(),
                course_repo.clone(),
            ),
            get_bootcamp_handler: GetBootcampHandler::new(
                bootcamp_repo.clone(),
                course_repo.clone(),
            ),
            find_in_radius_handler: FindBootcampsInRadiusHandler::new(
                bootcamp_repo.clone(),
                geocoder,
            ),
            list_courses_handler: ListCoursesHandler::new(
                bootcamp_repo.clone(),
                course_repo.clone(),
            ),
            get_course_handler: GetCourseHandler::new(bootcamp_repo, course_repo),
        }
    }
}
