//! Geocoder Adapters

mod http_geocoder;

pub use http_geocoder::{HttpGeocoder, HttpGeocoderConfig};
