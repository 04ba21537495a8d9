//! Secondary IP service lookup.

use log::debug;
use reqwest::Client;
use url::Url;

use super::fetch::fetch_body;
use super::types::SecondaryResponse;
use crate::error_handling::LookupError;

/// Queries the secondary service and classifies its body.
///
/// The body is never rejected: JSON that does not fit falls back to text,
/// see [`SecondaryResponse::parse`].
///
/// # Errors
///
/// Returns `LookupError::InvalidUrl`, `LookupError::Network` or
/// `LookupError::Body`; never `Decode`.
pub async fn lookup_secondary(
    client: &Client,
    secondary_url: &str,
) -> Result<SecondaryResponse, LookupError> {
    let url = Url::parse(secondary_url)
        .map_err(|e| LookupError::InvalidUrl(format!("{}: {}", secondary_url, e)))?;
    let body = fetch_body(client, url).await?;
    let parsed = SecondaryResponse::parse(&body);
    debug!("Secondary service answered {:?}", parsed);
    Ok(parsed)
}
