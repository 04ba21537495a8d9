//! Response shapes of the lookup services.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::config::GEO_STATUS_SUCCESS;

/// Geolocation service response.
///
/// Missing and `null` fields decode as empty strings, so a failed lookup can
/// still be printed field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoInfo {
    /// IP address the service resolved
    #[serde(deserialize_with = "null_as_empty")]
    pub query: String,
    /// Internet service provider name
    #[serde(deserialize_with = "null_as_empty")]
    pub isp: String,
    /// Country name, in English
    #[serde(deserialize_with = "null_as_empty")]
    pub country: String,
    /// `"success"` or `"fail"`
    #[serde(deserialize_with = "null_as_empty")]
    pub status: String,
    /// Failure reason, only present when `status` is not `"success"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl GeoInfo {
    /// Whether the service reported a successful lookup.
    pub fn is_success(&self) -> bool {
        self.status == GEO_STATUS_SUCCESS
    }
}

/// Secondary service response when it answers with JSON.
///
/// The service has used both `query` and `ip` for the address. Keys match
/// without regard to ASCII case, so `IP` and `Query` are accepted too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleIp {
    /// Address under the `query` key
    pub query: Option<String>,
    /// Address under the `ip` key
    pub ip: Option<String>,
}

impl SimpleIp {
    /// Reads the address fields of a JSON object.
    ///
    /// Returns `None` when an address field holds something other than a
    /// string or `null`.
    pub fn from_object(map: &Map<String, Value>) -> Option<Self> {
        Some(SimpleIp {
            query: string_field(map, "query")?,
            ip: string_field(map, "ip")?,
        })
    }

    /// Returns the first non-empty of `query` and `ip`.
    pub fn resolved_ip(&self) -> Option<&str> {
        [self.query.as_deref(), self.ip.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }
}

// An exact key wins over one that only matches ignoring case.
// Outer `None` means the value has the wrong type.
fn string_field(map: &Map<String, Value>, name: &str) -> Option<Option<String>> {
    let value = map.get(name).or_else(|| {
        map.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    });
    match value {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(_) => None,
    }
}

/// Parsed body of the secondary service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondaryResponse {
    /// The body was a JSON object (or `null`)
    Structured(SimpleIp),
    /// The body was not JSON; holds the trimmed text
    RawText(String),
    /// The body was empty or whitespace only
    Empty,
}

impl SecondaryResponse {
    /// Classifies a response body.
    ///
    /// Only a JSON object or `null` counts as structured. Any other body,
    /// including valid JSON of another type, falls back to trimmed text.
    pub fn parse(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Null) => return SecondaryResponse::Structured(SimpleIp::default()),
            Ok(Value::Object(map)) => {
                if let Some(simple) = SimpleIp::from_object(&map) {
                    return SecondaryResponse::Structured(simple);
                }
            }
            _ => {}
        }

        let text = String::from_utf8_lossy(body);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            SecondaryResponse::Empty
        } else {
            SecondaryResponse::RawText(trimmed.to_string())
        }
    }

    /// Returns the IP this response resolves to, if any.
    pub fn resolved_ip(&self) -> Option<&str> {
        match self {
            SecondaryResponse::Structured(simple) => simple.resolved_ip(),
            SecondaryResponse::RawText(text) => Some(text.as_str()),
            SecondaryResponse::Empty => None,
        }
    }
}
