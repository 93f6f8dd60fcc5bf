//! Error types for the Geocodio client

use std::fmt;

/// Errors from the Geocodio client
#[derive(Debug)]
pub enum GeocodioError {
    /// The service answered with something other than 200. `body` is the raw
    /// response text, which is not always JSON.
    StatusCode { status: u16, body: String },
    /// The transport failed to send the request or receive the response
    Http(Box<reqwest::Error>),
    /// Reading or decompressing the response body failed
    Io(std::io::Error),
    /// A success response did not match the expected shape
    Decode(serde_json::Error),
    /// The request body could not be serialized
    Encode(serde_json::Error),
}

impl GeocodioError {
    /// True for failures below the API layer (network, body read, gzip)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Io(_))
    }

    /// The HTTP status of a rejected request
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::StatusCode { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for GeocodioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StatusCode { status, body } => {
                write!(f, "Geocodio returned status {status}: {body}")
            }
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Io(e) => write!(f, "I/O error reading response: {e}"),
            Self::Decode(e) => write!(f, "Failed to parse response: {e}"),
            Self::Encode(e) => write!(f, "Failed to serialize request: {e}"),
        }
    }
}

impl std::error::Error for GeocodioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e.as_ref()),
            Self::Io(e) => Some(e),
            Self::Decode(e) | Self::Encode(e) => Some(e),
            Self::StatusCode { .. } => None,
        }
    }
}

impl From<reqwest::Error> for GeocodioError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(Box::new(err))
    }
}

impl From<std::io::Error> for GeocodioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, GeocodioError>;
