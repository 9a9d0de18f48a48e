//! Bootcamp Context - Bootcamp 限界上下文
//!
//! 职责:
//! - Bootcamp 字段校验
//! - 地理位置与球冠范围计算

mod entity;
mod value_objects;

pub use entity::{Bootcamp, BootcampChanges, DEFAULT_PHOTO};
pub use value_objects::{Career, GeoJsonType, GeoPoint, Location, SphericalCap, EARTH_RADIUS_MILES};
