//! Report rendering.

use std::fmt;

use crate::config::{
    PRIMARY_UNREACHABLE_NOTICE, REPORT_ENRICHED_HEADER, REPORT_FOOTER, REPORT_HEADER,
};
use crate::error_handling::LookupError;
use crate::lookup::{GeoInfo, SecondaryResponse};

/// Everything a lookup run gathered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupReport {
    /// Geolocation self-lookup, printed whatever its status
    pub primary: GeoInfo,
    /// Parsed secondary service response, `None` if the request failed
    pub secondary: Option<SecondaryResponse>,
    /// Geolocation of the secondary IP, `None` if absent or the lookup failed
    pub enriched: Option<GeoInfo>,
    /// One-line messages for recovered errors, in the order they happened
    pub notices: Vec<String>,
}

impl LookupReport {
    /// IP reported by the secondary service, if it reported one.
    pub fn secondary_ip(&self) -> Option<&str> {
        self.secondary.as_ref().and_then(SecondaryResponse::resolved_ip)
    }
}

impl fmt::Display for LookupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_HEADER)?;
        writeln!(f, "IP (ip-api)   : {}", self.primary.query)?;
        writeln!(f, "ISP           : {}", self.primary.isp)?;
        writeln!(f, "Country       : {}", self.primary.country)?;

        if let Some(ip) = self.secondary_ip() {
            writeln!(f, "IP (ipmyp)    : {}", ip)?;
        }

        if let Some(enriched) = &self.enriched {
            writeln!(f, "{}", REPORT_ENRICHED_HEADER)?;
            writeln!(f, "IP            : {}", enriched.query)?;
            writeln!(f, "ISP           : {}", enriched.isp)?;
            writeln!(f, "Country       : {}", enriched.country)?;
        }

        writeln!(f, "{}", REPORT_FOOTER)
    }
}

/// Renders the complete stdout text for a run.
///
/// A successful run prints its notices followed by the report. A failed run
/// prints a single line and no report.
pub fn render_output(outcome: &Result<LookupReport, LookupError>) -> String {
    let mut out = String::new();
    if let Ok(report) = outcome {
        for notice in &report.notices {
            out.push_str(notice);
            out.push('\n');
        }
    }
    out.push_str(&render_result(outcome));
    out
}

/// Renders the report, or the fatal line, without the notices.
///
/// For callers that already printed the notices as they were raised.
pub fn render_result(outcome: &Result<LookupReport, LookupError>) -> String {
    match outcome {
        Ok(report) => report.to_string(),
        Err(_) => format!("{}\n", PRIMARY_UNREACHABLE_NOTICE),
    }
}
