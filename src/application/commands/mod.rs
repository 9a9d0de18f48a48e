//! CQRS Commands - 写操作

mod bootcamp_commands;
mod course_commands;
pub mod handlers;

pub use bootcamp_commands::{
    CreateBootcamp, DeleteBootcamp, PhotoPayload, PhotoUpload, UpdateBootcamp,
    UploadBootcampPhoto,
};
pub use course_commands::{CreateCourse, DeleteCourse, UpdateCourse};
