//! Query string construction
//!
//! URLs are built deterministically: absent parameters are dropped, the rest
//! are sorted by name and form-urlencoded.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// API endpoint relative to the base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Geocode,
    Reverse,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Geocode => "geocode",
            Self::Reverse => "reverse",
        }
    }
}

/// Query parameters for a single request. Always carries `api_key`.
#[derive(Debug, Clone)]
pub struct Query {
    params: BTreeMap<&'static str, Option<String>>,
}

impl Query {
    pub fn new(api_key: &str) -> Self {
        let mut params = BTreeMap::new();
        params.insert("api_key", Some(api_key.to_string()));
        Self { params }
    }

    /// Set a parameter. `None` values are omitted from the URL entirely.
    pub fn set(&mut self, name: &'static str, value: Option<String>) -> &mut Self {
        self.params.insert(name, value);
        self
    }

    /// Encoded `key=value&...` string, sorted by key
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
            .map(|(name, value)| {
                let encoded: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
                format!("{name}={encoded}")
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full request URL: `base_url + endpoint + "?" + query`
    pub fn into_url(self, base_url: &str, endpoint: Endpoint) -> String {
        let separator = if base_url.ends_with('/') { "" } else { "/" };
        format!(
            "{base_url}{separator}{}?{}",
            endpoint.as_str(),
            self.to_query_string()
        )
    }
}

/// Comma-joined field list. Empty lists are omitted like absent ones.
pub fn format_fields(fields: &[String]) -> Option<String> {
    if fields.is_empty() {
        None
    } else {
        Some(fields.join(","))
    }
}

pub fn format_limit(limit: Option<u32>) -> Option<String> {
    limit.map(|l| l.to_string())
}

/// Reverse geocoding `q` value: `"<lat>,<lon>"`
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{},{}", format_double(latitude), format_double(longitude))
}

/// Render a double the way the service's reference clients do: shortest
/// round-trip digits, always a fractional part, and `d.dE±n` notation
/// outside [1e-3, 1e7).
fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        let text = if value.is_sign_negative() { "-0.0" } else { "0.0" };
        return text.to_string();
    }

    if (1e-3..1e7).contains(&value.abs()) {
        // Debug keeps the trailing ".0" on integral values
        return format!("{value:?}");
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => formatted,
    }
}
