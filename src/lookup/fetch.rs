//! Fetch-and-decode helpers.

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error_handling::LookupError;

/// Issues a GET request and reads the full response body.
///
/// The HTTP status is logged but never turned into an error: the caller gets
/// the body of a 4xx/5xx response just like a 200.
///
/// # Errors
///
/// - `LookupError::Network` if the request cannot be sent
/// - `LookupError::Body` if the body cannot be read to the end
pub async fn fetch_body(client: &Client, url: Url) -> Result<Vec<u8>, LookupError> {
    debug!("GET {}", url);
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(LookupError::Network)?;

    let status = response.status();
    if status.is_success() {
        debug!("{} answered {}", url, status);
    } else {
        debug!("{} answered {}, reading body anyway", url, status);
    }

    let body = response.bytes().await.map_err(LookupError::Body)?;
    Ok(body.to_vec())
}

/// Fetches `url` and decodes the body as JSON into `T`.
///
/// Decoding is attempted even when the status code is not a success code.
///
/// # Errors
///
/// Any error of [`fetch_body`], or `LookupError::Decode` if the body is not
/// valid JSON for `T`.
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: Url) -> Result<T, LookupError> {
    let body = fetch_body(client, url).await?;
    Ok(serde_json::from_slice(&body)?)
}
