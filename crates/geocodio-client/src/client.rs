use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientOptions;
use crate::error::{GeocodioError, Result};
use crate::query::{format_coordinates, format_fields, format_limit, Endpoint, Query};
use crate::response::resolve;
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport};
use crate::types::{
    BatchGeocodingRequest, BatchGeocodingResponse, GeocodingRequest, GeocodingResponse,
    ReverseGeocodingRequest, ReverseGeocodingResponse,
};

/// Geocodio API client
///
/// Each call builds its own query and resolves its own response, so a single
/// client can be shared across tasks.
pub struct GeocodioClient {
    transport: Arc<dyn HttpTransport>,
    api_key: String,
    options: ClientOptions,
}

impl GeocodioClient {
    /// Create a client with the default reqwest transport and options
    pub fn new(api_key: &str) -> Self {
        Self::with_options(api_key, ClientOptions::default())
    }

    /// Create a client with the default reqwest transport
    pub fn with_options(api_key: &str, options: ClientOptions) -> Self {
        Self::with_transport_and_options(Arc::new(ReqwestTransport::new()), api_key, options)
    }

    /// Create a client over a caller-supplied transport with default options
    pub fn with_transport(transport: Arc<dyn HttpTransport>, api_key: &str) -> Self {
        Self::with_transport_and_options(transport, api_key, ClientOptions::default())
    }

    pub fn with_transport_and_options(
        transport: Arc<dyn HttpTransport>,
        api_key: &str,
        options: ClientOptions,
    ) -> Self {
        Self {
            transport,
            api_key: api_key.to_string(),
            options,
        }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Geocode a single address
    ///
    /// Accepts a full [`GeocodingRequest`] or a plain query string, which is
    /// shorthand for a request with only `q` set.
    /// See <https://www.geocod.io/docs/#single-address>.
    pub async fn geocode(
        &self,
        request: impl Into<GeocodingRequest>,
    ) -> Result<GeocodingResponse> {
        let request = request.into();
        let mut query = Query::new(&self.api_key);
        query
            .set("q", request.q)
            .set("country", request.country)
            .set("fields", format_fields(&request.fields))
            .set("limit", format_limit(request.limit))
            .set("format", request.format)
            .set("street", request.street)
            .set("city", request.city)
            .set("state", request.state)
            .set("postal_code", request.postal_code);

        self.send(Method::GET, Endpoint::Geocode, query, HeaderMap::new(), None)
            .await
    }

    /// Geocode many addresses in one POST
    ///
    /// See <https://www.geocod.io/docs/#batch-geocoding>.
    pub async fn batch_geocode(
        &self,
        request: &BatchGeocodingRequest,
    ) -> Result<BatchGeocodingResponse> {
        let mut query = Query::new(&self.api_key);
        query
            .set("fields", format_fields(&request.fields))
            .set("limit", format_limit(request.limit));

        let body = serde_json::to_vec(&request.queries).map_err(GeocodioError::Encode)?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        debug!(queries = request.queries.len(), "Batch geocoding");
        self.send(Method::POST, Endpoint::Geocode, query, headers, Some(body))
            .await
    }

    /// Reverse geocode a coordinate pair
    ///
    /// See <https://www.geocod.io/docs/#reverse-geocoding-single-coordinate>.
    pub async fn reverse_geocode(
        &self,
        request: &ReverseGeocodingRequest,
    ) -> Result<ReverseGeocodingResponse> {
        let mut query = Query::new(&self.api_key);
        query
            .set(
                "q",
                Some(format_coordinates(request.latitude, request.longitude)),
            )
            .set("fields", format_fields(&request.fields))
            .set("limit", format_limit(request.limit))
            .set("format", request.format.clone());

        self.send(Method::GET, Endpoint::Reverse, query, HeaderMap::new(), None)
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: Endpoint,
        query: Query,
        mut headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        if self.options.gzip {
            headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
        }

        // The URL carries the API key, so only the endpoint is logged
        debug!(endpoint = endpoint.as_str(), method = %method, "Sending Geocodio request");

        let request = HttpRequest {
            method,
            url: query.into_url(&self.options.base_url, endpoint),
            headers,
            body,
        };
        let response = self.transport.send(request).await?;

        debug!(
            endpoint = endpoint.as_str(),
            status = response.status.as_u16(),
            "Received Geocodio response"
        );
        resolve(response)
    }
}
