//! public_ip_report library: public IP lookup and reporting
//!
//! This library looks up the caller's public IP address with two independent
//! services, geolocates the address each of them reports, and renders a
//! plain-text report.
//!
//! # Example
//!
//! ```no_run
//! use public_ip_report::initialization::init_client;
//! use public_ip_report::{render_result, run_lookup_with, Config, Endpoints};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = init_client(&Config::default())?;
//! let outcome = run_lookup_with(&client, &Endpoints::default(), |notice| {
//!     println!("{}", notice)
//! })
//! .await;
//! print!("{}", render_result(&outcome));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod lookup;
mod report;

// Re-export public API
pub use config::{Config, Endpoints, LogFormat, LogLevel};
pub use error_handling::{ErrorType, LookupError};
pub use lookup::{GeoInfo, SecondaryResponse, SimpleIp};
pub use report::{render_output, render_result, LookupReport};
pub use run::{run_lookup, run_lookup_with};

// Internal run module (contains the lookup sequence)
mod run {
    use log::info;
    use reqwest::Client;

    use crate::config::{Endpoints, SECONDARY_EMPTY_NOTICE};
    use crate::error_handling::LookupError;
    use crate::lookup::{lookup_ip, lookup_own_ip, lookup_secondary, SecondaryResponse};
    use crate::report::LookupReport;

    /// Runs the lookup sequence: self-lookup, secondary lookup, enrichment.
    ///
    /// The requests are made one after the other. Only the self-lookup is
    /// fatal; failures of the other two are recorded as notices on the report.
    /// Use [`run_lookup_with`] to see each notice as soon as it happens.
    ///
    /// # Errors
    ///
    /// Returns the self-lookup's error if it cannot be fetched or decoded. No
    /// further request is made in that case.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use public_ip_report::{run_lookup, Endpoints};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let report = run_lookup(&reqwest::Client::new(), &Endpoints::default()).await?;
    /// println!("My IP is {}", report.primary.query);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_lookup(
        client: &Client,
        endpoints: &Endpoints,
    ) -> Result<LookupReport, LookupError> {
        run_lookup_with(client, endpoints, |_| {}).await
    }

    /// Like [`run_lookup`], calling `on_notice` with each notice when it is
    /// raised, before the next request starts.
    ///
    /// The notices are still collected on the returned report.
    pub async fn run_lookup_with<F>(
        client: &Client,
        endpoints: &Endpoints,
        mut on_notice: F,
    ) -> Result<LookupReport, LookupError>
    where
        F: FnMut(&str),
    {
        let primary = match lookup_own_ip(client, &endpoints.geo_url).await {
            Ok(info) => info,
            Err(e) => {
                // The caller prints the one user-facing line
                info!("[{}] geolocation self-lookup failed: {}", e.error_type(), e);
                return Err(e);
            }
        };
        info!("Own IP according to ip-api: {}", primary.query);

        let mut notices = Vec::new();
        let mut notify = |notice: String| {
            on_notice(&notice);
            notices.push(notice);
        };

        let secondary = match lookup_secondary(client, &endpoints.secondary_url).await {
            Ok(parsed) => {
                if parsed == SecondaryResponse::Empty {
                    notify(SECONDARY_EMPTY_NOTICE.to_string());
                }
                Some(parsed)
            }
            Err(e) => {
                info!("[{}] secondary lookup failed: {}", e.error_type(), e);
                let notice = match &e {
                    LookupError::Body(inner) => format!("ipmyp read failed: {}", inner),
                    other => format!("ipmyp lookup failed: {}", other),
                };
                notify(notice);
                None
            }
        };

        let secondary_ip = secondary.as_ref().and_then(SecondaryResponse::resolved_ip);
        let enriched = match secondary_ip {
            Some(ip) => match lookup_ip(client, &endpoints.geo_url, ip).await {
                Ok(info) => Some(info),
                Err(e) => {
                    info!("[{}] enrichment of {} failed: {}", e.error_type(), ip, e);
                    notify(format!("ip-api lookup for ipmyp failed: {}", e));
                    None
                }
            },
            None => None,
        };

        Ok(LookupReport {
            primary,
            secondary,
            enriched,
            notices,
        })
    }
}
