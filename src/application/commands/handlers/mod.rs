//! Command Handlers

mod bootcamp_handlers;
mod course_handlers;

pub use bootcamp_handlers::{
    CreateBootcampHandler, DeleteBootcampHandler, UpdateBootcampHandler,
    UploadBootcampPhotoHandler,
};
pub use course_handlers::{CreateCourseHandler, DeleteCourseHandler, UpdateCourseHandler};
