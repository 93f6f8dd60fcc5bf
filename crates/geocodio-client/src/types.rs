//! Request and response types for the Geocodio API
//!
//! Response structs mirror the service's JSON. Wire names are lower_snake_case
//! except for `_warnings`, which is mapped explicitly.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Single-address forward geocoding request
///
/// Either `q` or the structured fields (`street`, `city`, ...) should be set.
/// Both may be sent; the service decides which wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeocodingRequest {
    pub q: Option<String>,
    pub country: Option<String>,
    /// Extra data appends to request, e.g. `cd` or `timezone`
    pub fields: Vec<String>,
    pub limit: Option<u32>,
    pub format: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

impl GeocodingRequest {
    /// Request for a free-text address
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Default::default()
        }
    }
}

impl From<&str> for GeocodingRequest {
    fn from(q: &str) -> Self {
        Self::new(q)
    }
}

impl From<String> for GeocodingRequest {
    fn from(q: String) -> Self {
        Self::new(q)
    }
}

/// Batch geocoding request, sent as a JSON array in the POST body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchGeocodingRequest {
    pub queries: Vec<String>,
    pub fields: Vec<String>,
    pub limit: Option<u32>,
}

impl BatchGeocodingRequest {
    pub fn new<I, S>(queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queries: queries.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

/// Reverse geocoding request for a single coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseGeocodingRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub fields: Vec<String>,
    pub limit: Option<u32>,
    pub format: Option<String>,
}

impl ReverseGeocodingRequest {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            fields: Vec::new(),
            limit: None,
            format: None,
        }
    }
}

/// Parsed address parts, see <https://www.geocod.io/docs/#address-components>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressComponents {
    /// House number, e.g. "2100" or "250 1/2"
    pub number: Option<String>,
    /// Directional before the street name, e.g. N or NE
    pub predirectional: Option<String>,
    /// Street prefix, common in French addresses (Rue, Boulevard)
    pub prefix: Option<String>,
    pub street: Option<String>,
    /// Abbreviated suffix, e.g. St., Ave.
    pub suffix: Option<String>,
    pub postdirectional: Option<String>,
    /// Only present on input address components
    #[serde(rename = "secondaryunit")]
    pub secondary_unit: Option<String>,
    #[serde(rename = "secondarynumber")]
    pub secondary_number: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    /// 5-digit ZIP for US results, 3-character FSA for Canadian ones
    pub zip: Option<String>,
    pub country: Option<String>,
    /// Street with directionals and suffix/prefix, without the house number
    pub formatted_street: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// The service's normalized echo of the request address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodingInput {
    pub address_components: Option<AddressComponents>,
    pub formatted_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingResult {
    pub address_components: Option<AddressComponents>,
    pub formatted_address: Option<String>,
    pub location: Option<Location>,
    /// Confidence in [0, 1]
    pub accuracy: Option<f64>,
    /// e.g. "rooftop", "range_interpolation", "place"
    pub accuracy_type: Option<String>,
    pub source: Option<String>,
    /// Field appends keyed by name. `None` unless fields were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Map<String, Value>>,
    #[serde(
        rename = "_warnings",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub warnings: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingResponse {
    pub input: Option<GeocodingInput>,
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
    /// Only sent by some API versions
    #[serde(
        rename = "_warnings",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub warnings: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseGeocodingResponse {
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
    #[serde(
        rename = "_warnings",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub warnings: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchGeocodingResult {
    pub query: String,
    pub response: GeocodingResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchGeocodingResponse {
    #[serde(default)]
    pub results: Vec<BatchGeocodingResult>,
}
