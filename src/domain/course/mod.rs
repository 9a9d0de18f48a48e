//! Course Context - Course 限界上下文

mod entity;
mod value_objects;

pub use entity::{Course, CourseChanges};
pub use value_objects::MinimumSkill;
