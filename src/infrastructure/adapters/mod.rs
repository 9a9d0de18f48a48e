//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod geocoder;
pub mod storage;

pub use geocoder::*;
pub use storage::*;
