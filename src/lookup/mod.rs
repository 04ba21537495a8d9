//! Public IP lookups against the geolocation and secondary services.
//!
//! All lookups go through [`fetch_body`], which reads the whole response body
//! whatever the HTTP status is. The geolocation service reports failures in
//! its JSON body, so the body is always worth decoding.

mod fetch;
mod geo;
mod secondary;
mod types;

// Re-export public API
pub use fetch::{fetch_body, fetch_json};
pub use geo::{geo_lookup_url, lookup_ip, lookup_own_ip};
pub use secondary::lookup_secondary;
pub use types::{GeoInfo, SecondaryResponse, SimpleIp};
