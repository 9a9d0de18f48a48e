//! Geocoder Port - 地理编码抽象
//!
//! 将邮编 / 地址解析为经纬度，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::bootcamp::{GeoPoint, Location};

/// 地理编码错误
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 地理编码结果
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
}

impl GeocodedLocation {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.longitude, self.latitude)
    }

    pub fn into_location(self) -> Location {
        let mut location = Location::at(self.point());
        location.formatted_address = self.formatted_address;
        location.street = self.street;
        location.city = self.city;
        location.state = self.state;
        location.zipcode = self.zipcode;
        location.country = self.country;
        location
    }
}

/// Geocoder Port
#[async_trait]
pub trait GeocoderPort: Send + Sync {
    /// 解析查询（邮编或地址），按匹配度排序返回
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodedLocation>, GeocodeError>;
}
