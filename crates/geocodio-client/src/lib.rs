//! Geocodio Client
//!
//! An async Rust client for the [Geocodio](https://www.geocod.io/) geocoding API.
//! Supports single, batch and reverse geocoding, including gzip-compressed
//! responses and arbitrary field appends.
//!
//! # Example
//!
//! ```no_run
//! use geocodio_client::{GeocodioClient, GeocodingRequest, ReverseGeocodingRequest};
//!
//! # async fn example() -> Result<(), geocodio_client::GeocodioError> {
//! let client = GeocodioClient::new("YOUR_API_KEY");
//!
//! // Free-text query
//! let response = client.geocode("1109 N Highland St, Arlington VA").await?;
//! for result in &response.results {
//!     println!("{:?} {:?}", result.formatted_address, result.location);
//! }
//!
//! // Structured address with field appends
//! let response = client
//!     .geocode(GeocodingRequest {
//!         street: Some("1109 N Highland St".into()),
//!         city: Some("Arlington".into()),
//!         state: Some("VA".into()),
//!         fields: vec!["timezone".into()],
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{:?}", response.results.first().and_then(|r| r.fields.as_ref()));
//!
//! // Coordinates to address
//! let response = client
//!     .reverse_geocode(&ReverseGeocodingRequest::new(38.9002898, -76.9990361))
//!     .await?;
//! println!("{} results", response.results.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod query;
mod response;
mod transport;
mod types;

pub use client::GeocodioClient;
pub use config::{ClientOptions, DEFAULT_BASE_URL};
pub use error::{GeocodioError, Result};
pub use query::{format_coordinates, Endpoint, Query};
pub use response::resolve;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use types::{
    AddressComponents, BatchGeocodingRequest, BatchGeocodingResponse, BatchGeocodingResult,
    GeocodingInput, GeocodingRequest, GeocodingResponse, GeocodingResult, Location,
    ReverseGeocodingRequest, ReverseGeocodingResponse,
};
