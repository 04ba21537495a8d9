//! Geolocation service lookups.

use log::{debug, warn};
use reqwest::Client;
use url::Url;

use super::fetch::fetch_json;
use super::types::GeoInfo;
use crate::error_handling::LookupError;

/// Builds the geolocation URL for `ip`, or for the caller's own IP when `ip` is `None`.
///
/// The IP is appended as a single, percent-encoded path segment, so
/// `http://ip-api.com/json/` becomes `http://ip-api.com/json/1.2.3.4`.
///
/// # Errors
///
/// Returns `LookupError::InvalidUrl` if `base` is not an absolute URL that can
/// take path segments.
pub fn geo_lookup_url(base: &str, ip: Option<&str>) -> Result<Url, LookupError> {
    let mut url =
        Url::parse(base).map_err(|e| LookupError::InvalidUrl(format!("{}: {}", base, e)))?;
    if let Some(ip) = ip {
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(format!("{}: cannot take a path", base)))?
            .pop_if_empty()
            .push(ip);
    }
    Ok(url)
}

// A `null` body decodes as an empty response
async fn fetch_geo_info(client: &Client, url: Url) -> Result<GeoInfo, LookupError> {
    let info: Option<GeoInfo> = fetch_json(client, url).await?;
    Ok(info.unwrap_or_default())
}

/// Looks up the caller's own IP.
///
/// The decoded response is returned whatever its `status` says; a failure
/// status only produces a warning and the fields print as they are.
pub async fn lookup_own_ip(client: &Client, geo_url: &str) -> Result<GeoInfo, LookupError> {
    let url = geo_lookup_url(geo_url, None)?;
    let info = fetch_geo_info(client, url).await?;
    if !info.is_success() {
        warn!(
            "Geolocation self-lookup returned status {:?}{}",
            info.status,
            info.message
                .as_deref()
                .map(|m| format!(" ({})", m))
                .unwrap_or_default()
        );
    }
    Ok(info)
}

/// Looks up a specific IP.
///
/// # Errors
///
/// Besides fetch errors, returns `LookupError::Status` when the service does
/// not report `success`.
pub async fn lookup_ip(client: &Client, geo_url: &str, ip: &str) -> Result<GeoInfo, LookupError> {
    let url = geo_lookup_url(geo_url, Some(ip))?;
    let info = fetch_geo_info(client, url).await?;
    if !info.is_success() {
        return Err(LookupError::Status {
            status: info.status,
            message: info.message,
        });
    }
    debug!("{} resolved to {} / {}", ip, info.isp, info.country);
    Ok(info)
}
