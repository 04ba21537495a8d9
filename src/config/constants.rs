//! Configuration constants.
//!
//! This module defines the fixed service endpoints, network timeouts and the
//! labels used when printing the report.

// Service endpoints
/// Geolocation service base URL.
///
/// `GET` on this URL looks up the caller's own address. Appending an IP as a
/// path segment looks up that address instead.
pub const GEO_SERVICE_URL: &str = "http://ip-api.com/json/";
/// Secondary IP service URL. Returns either JSON (`{query, ip}`) or a bare IP.
pub const SECONDARY_SERVICE_URL: &str = "https://api.ipmyp.ir/";

/// Status value the geolocation service reports for a successful lookup.
pub const GEO_STATUS_SUCCESS: &str = "success";

// Network operation timeouts
/// Default whole-request deadline in seconds (connect, send and body read)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Log filter used when neither `--log-level` nor `RUST_LOG` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// User-Agent sent with every lookup request.
pub const DEFAULT_USER_AGENT: &str = concat!("public_ip_report/", env!("CARGO_PKG_VERSION"));

// Report layout
/// First line of the report
pub const REPORT_HEADER: &str = "================ PUBLIC IP INFO ================";
/// Separator above the enriched secondary block
pub const REPORT_ENRICHED_HEADER: &str = "--------------- ipmyp enriched ----------------";
/// Last line of the report
pub const REPORT_FOOTER: &str = "================================================";

// User-facing notices
/// Printed instead of the report when the primary lookup fails.
pub const PRIMARY_UNREACHABLE_NOTICE: &str = "ip-api unreachable";
/// Printed when the secondary service answers with an empty body.
pub const SECONDARY_EMPTY_NOTICE: &str = "ipmyp: empty response";
