//! Turns raw transport responses into typed results or errors

use std::io::Read;

use flate2::read::GzDecoder;
use reqwest::header::{HeaderMap, CONTENT_ENCODING};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{GeocodioError, Result};
use crate::transport::HttpResponse;

/// Decode the body and map it to `T`, or to a status-code error for anything
/// other than 200
pub fn resolve<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    let status = response.status;
    let text = read_body(response)?;

    if status != StatusCode::OK {
        warn!(status = status.as_u16(), "Geocodio returned non-success status");
        return Err(GeocodioError::StatusCode {
            status: status.as_u16(),
            body: text,
        });
    }

    serde_json::from_str(&text).map_err(GeocodioError::Decode)
}

/// Read the full body as text, gunzipping first if the server says so.
/// The reader is consumed here and dropped on every path.
fn read_body(response: HttpResponse) -> Result<String> {
    let mut reader: Box<dyn Read + Send> = if is_gzip(&response.headers) {
        debug!("Decompressing gzip response body");
        Box::new(GzDecoder::new(response.body))
    } else {
        response.body
    };

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn is_gzip(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().eq_ignore_ascii_case("gzip"))
        .unwrap_or(false)
}
