//! End-to-end checks against the real Geocodio API.
//!
//! Run with `GEOCODIO_API_KEY=... cargo test -p geocodio-client -- --ignored`.

use geocodio_client::{GeocodioClient, GeocodingRequest};

fn live_client() -> GeocodioClient {
    let api_key = std::env::var("GEOCODIO_API_KEY").expect("GEOCODIO_API_KEY must be set");
    GeocodioClient::new(&api_key)
}

#[tokio::test]
#[ignore = "requires GEOCODIO_API_KEY and network access"]
async fn geocode_single_address() {
    let client = live_client();

    let response = client
        .geocode("1109 N Highland St, Arlington VA")
        .await
        .unwrap();

    assert_eq!(response.results.len(), 1);
}

#[tokio::test]
#[ignore = "requires GEOCODIO_API_KEY and network access"]
async fn geocode_result_warnings() {
    let client = live_client();

    let response = client
        .geocode(GeocodingRequest {
            q: Some("Road X, Hot Springs, AR".to_string()),
            fields: vec!["acs-social".to_string()],
            limit: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(response.results.len(), 1);
    assert_eq!(
        response.results[0].warnings,
        Some(vec![
            "acs-social was skipped since result is not street-level".to_string()
        ])
    );
}
