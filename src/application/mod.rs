//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Repository、Geocoder、PhotoStorage）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Bootcamp commands
    CreateBootcamp,
    DeleteBootcamp,
    PhotoPayload,
    PhotoUpload,
    UpdateBootcamp,
    UploadBootcampPhoto,
    // Course commands
    CreateCourse,
    DeleteCourse,
    UpdateCourse,
    // Handlers
    handlers::{
        CreateBootcampHandler, CreateCourseHandler, DeleteBootcampHandler, DeleteCourseHandler,
        UpdateBootcampHandler, UpdateCourseHandler, UploadBootcampPhotoHandler,
    },
};

pub use error::{parse_record_id, ApplicationError};

pub use ports::{
    // Repositories
    BootcampRepositoryPort,
    CourseRepositoryPort,
    RepositoryError,
    // Geocoder
    GeocodeError,
    GeocodedLocation,
    GeocoderPort,
    // Photo storage
    PhotoStorageError,
    PhotoStoragePort,
};

pub use queries::{
    // Bootcamp queries
    FindBootcampsInRadius,
    GetBootcamp,
    ListBootcamps,
    ListBootcampsByCondition,
    // Course queries
    GetCourse,
    ListCourses,
    // Handlers
    handlers::{
        BootcampPage, BootcampSummary, BootcampView, CourseView, FindBootcampsInRadiusHandler,
        GetBootcampHandler, GetCourseHandler, ListBootcampsByConditionHandler,
        ListBootcampsHandler, ListCoursesHandler,
    },
};
