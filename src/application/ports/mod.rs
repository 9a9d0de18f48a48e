//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod geocoder;
mod photo_storage;
mod repositories;

pub use geocoder::{GeocodeError, GeocodedLocation, GeocoderPort};
pub use photo_storage::{PhotoStorageError, PhotoStoragePort};
pub use repositories::{BootcampRepositoryPort, CourseRepositoryPort, RepositoryError};
