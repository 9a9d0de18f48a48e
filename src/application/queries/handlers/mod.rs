//! Query Handlers

mod bootcamp_handlers;
mod course_handlers;

pub use bootcamp_handlers::{
    BootcampPage, BootcampView, FindBootcampsInRadiusHandler, GetBootcampHandler,
    ListBootcampsByConditionHandler, ListBootcampsHandler,
};
pub use course_handlers::{BootcampSummary, CourseView, GetCourseHandler, ListCoursesHandler};
