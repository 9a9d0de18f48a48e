//! CQRS Queries - 读操作

mod bootcamp_queries;
mod course_queries;
pub mod handlers;

pub use bootcamp_queries::{
    FindBootcampsInRadius, GetBootcamp, ListBootcamps, ListBootcampsByCondition,
};
pub use course_queries::{GetCourse, ListCourses};
