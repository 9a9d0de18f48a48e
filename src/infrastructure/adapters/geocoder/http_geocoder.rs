//! HTTP Geocoder - 调用 MapQuest 风格的地理编码服务
//!
//! 实现 GeocoderPort trait
//!
//! 外部 API:
//! GET {base_url}/geocoding/v1/address?key=...&location=...
//! Response: {"info": {"statuscode": 0}, "results": [{"locations": [...]}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::application::ports::{GeocodeError, GeocodedLocation, GeocoderPort};

/// HTTP Geocoder 配置
#[derive(Debug, Clone)]
pub struct HttpGeocoderConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// API key
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpGeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.mapquestapi.com".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

impl HttpGeocoderConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    info: Option<ResponseInfo>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct ResponseInfo {
    statuscode: i64,
    #[serde(default)]
    messages: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    locations: Vec<ProviderLocation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderLocation {
    #[serde(default)]
    street: Option<String>,
    /// 城市
    #[serde(default)]
    admin_area5: Option<String>,
    /// 州
    #[serde(default)]
    admin_area3: Option<String>,
    /// 国家代码
    #[serde(default)]
    admin_area1: Option<String>,
    #[serde(default)]
    postal_code: Option<String>,
    lat_lng: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<ProviderLocation> for GeocodedLocation {
    fn from(loc: ProviderLocation) -> Self {
        let street = non_empty(loc.street);
        let city = non_empty(loc.admin_area5);
        let state = non_empty(loc.admin_area3);
        let zipcode = non_empty(loc.postal_code);
        let country = non_empty(loc.admin_area1);

        let state_zip = [state.as_deref(), zipcode.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let parts: Vec<&str> = [
            street.as_deref(),
            city.as_deref(),
            Some(state_zip.as_str()),
            country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect();
        let formatted_address = (!parts.is_empty()).then(|| parts.join(", "));

        Self {
            latitude: loc.lat_lng.lat,
            longitude: loc.lat_lng.lng,
            formatted_address,
            street,
            city,
            state,
            zipcode,
            country,
        }
    }
}

/// 解析服务响应体
fn parse_response(body: &str) -> Result<Vec<GeocodedLocation>, GeocodeError> {
    let response: GeocodeResponse =
        serde_json::from_str(body).map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

    if let Some(info) = response.info {
        if info.statuscode != 0 {
            return Err(GeocodeError::ServiceError(format!(
                "status {}: {}",
                info.statuscode,
                info.messages.join("; ")
            )));
        }
    }

    Ok(response
        .results
        .into_iter()
        .flat_map(|r| r.locations)
        .map(GeocodedLocation::from)
        .collect())
}

/// HTTP Geocoder
pub struct HttpGeocoder {
    client: Client,
    config: HttpGeocoderConfig,
}

impl HttpGeocoder {
    pub fn new(config: HttpGeocoderConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodeError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn address_url(&self) -> String {
        format!(
            "{}/geocoding/v1/address",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl GeocoderPort for HttpGeocoder {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodedLocation>, GeocodeError> {
        tracing::debug!(url = %self.address_url(), query = %query, "Sending geocode request");

        let response = self
            .client
            .get(self.address_url())
            .query(&[("key", self.config.api_key.as_str()), ("location", query)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodeError::Timeout
                } else if e.is_connect() {
                    GeocodeError::NetworkError(format!("Cannot connect to geocoder: {}", e))
                } else {
                    GeocodeError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeocodeError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;
        let locations = parse_response(&body)?;

        tracing::info!(query = %query, matches = locations.len(), "Geocode completed");
        Ok(locations)
    }
}
