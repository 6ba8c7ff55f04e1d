use super::*;
use crate::state::test_helpers::{test_app_state, test_app_state_with_key};

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

fn map_query(address: Option<&str>, width: Option<&str>, height: Option<&str>) -> StaticMapQuery {
    StaticMapQuery {
        address: address.map(str::to_owned),
        width: width.map(str::to_owned),
        height: height.map(str::to_owned),
    }
}

// =============================================================================
// GET /api/places/static-map
// =============================================================================

#[tokio::test]
async fn static_map_missing_address_returns_400() {
    let state = test_app_state_with_key("test-key");
    let response = static_map(State(state), Query(StaticMapQuery::default())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, serde_json::json!({ "error": "address is required" }));
}

#[tokio::test]
async fn static_map_missing_address_wins_over_missing_key() {
    // Parameter validation happens before the configuration check.
    let response = static_map(State(test_app_state()), Query(map_query(None, Some("640"), None))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, serde_json::json!({ "error": "address is required" }));
}

#[tokio::test]
async fn static_map_blank_address_returns_400() {
    let state = test_app_state_with_key("test-key");
    let response = static_map(State(state), Query(map_query(Some("   "), None, None))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn static_map_missing_key_returns_500() {
    let response = static_map(State(test_app_state()), Query(map_query(Some("Oslo"), None, None))).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Google Places API key not configured" })
    );
}

#[tokio::test]
async fn static_map_redirects_with_302() {
    let state = test_app_state_with_key("test-key");
    let response = static_map(State(state), Query(map_query(Some("Oslo"), None, None))).await;
    assert_eq!(response.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn static_map_target_encodes_address_once_as_center_and_once_as_marker() {
    let state = test_app_state_with_key("test-key");
    let query = map_query(Some("1600 Amphitheatre Pkwy"), None, None);
    let response = static_map(State(state), Query(query)).await;
    let target = location(&response);
    assert_eq!(target.matches("1600%20Amphitheatre%20Pkwy").count(), 2);
    assert!(target.contains("center=1600%20Amphitheatre%20Pkwy"));
    assert!(target.contains("markers=1600%20Amphitheatre%20Pkwy"));
    assert!(target.contains("zoom=15"));
    assert!(target.contains("size=800x400"));
    assert!(target.contains("key=test-key"));
}

#[tokio::test]
async fn static_map_honors_custom_dimensions() {
    let state = test_app_state_with_key("test-key");
    let response = static_map(State(state), Query(map_query(Some("Oslo"), Some("1024"), Some("768")))).await;
    assert!(location(&response).contains("size=1024x768"));
}

#[tokio::test]
async fn static_map_defaults_unparsable_dimensions() {
    let state = test_app_state_with_key("test-key");
    let response = static_map(State(state), Query(map_query(Some("Oslo"), Some("abc"), Some("0")))).await;
    assert!(location(&response).contains("size=800x400"));
}

#[tokio::test]
async fn static_map_construction_failure_returns_500_with_details() {
    let state = test_app_state_with_key("test-key");
    let address = "a".repeat(20_000);
    let response = static_map(State(state), Query(map_query(Some(&address), None, None))).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to generate static map");
    assert!(body["details"].is_string());
    assert!(!body["details"].as_str().unwrap().contains("test-key"));
}

// =============================================================================
// GET /api/places/photo
// =============================================================================

#[tokio::test]
async fn photo_missing_place_id_returns_400() {
    let state = test_app_state_with_key("test-key");
    let response = photo(State(state), Query(PhotoQuery::default())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, serde_json::json!({ "error": "place_id is required" }));
}

#[tokio::test]
async fn photo_blank_place_id_returns_400() {
    let state = test_app_state_with_key("test-key");
    let query = PhotoQuery { place_id: Some("  ".to_owned()), maxwidth: None };
    let response = photo(State(state), Query(query)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn photo_failure_maps_to_502_with_details() {
    let response = photo_failure_response(&maps::MapsError::PhotoUpstream { status: 403 });
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to fetch place photo");
    assert_eq!(body["details"], "photo upstream returned status 403");
}

#[tokio::test]
async fn photo_failure_details_carry_no_upstream_url() {
    let err = maps::MapsError::PhotoRequest("error sending request".to_owned());
    let response = photo_failure_response(&err);
    let body = body_json(response).await;
    let details = body["details"].as_str().unwrap();
    assert!(!details.contains("http"));
    assert!(!details.contains("key="));
}

#[tokio::test]
async fn photo_missing_key_returns_500() {
    let query = PhotoQuery { place_id: Some("ChIJabc".to_owned()), maxwidth: None };
    let response = photo(State(test_app_state()), Query(query)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Google Places API key not configured" })
    );
}

// =============================================================================
// Response helpers
// =============================================================================

#[test]
fn non_empty_filters_blank_values() {
    assert_eq!(non_empty(None), None);
    assert_eq!(non_empty(Some("")), None);
    assert_eq!(non_empty(Some("   ")), None);
    assert_eq!(non_empty(Some("  Oslo ")), Some("Oslo"));
}

#[tokio::test]
async fn error_response_includes_details_only_when_present() {
    let without = error_response(StatusCode::BAD_REQUEST, "nope", None);
    assert_eq!(body_json(without).await, serde_json::json!({ "error": "nope" }));

    let with = error_response(StatusCode::BAD_GATEWAY, "nope", Some("why".to_owned()));
    assert_eq!(body_json(with).await, serde_json::json!({ "error": "nope", "details": "why" }));
}

#[tokio::test]
async fn redirect_found_rejects_invalid_header_values() {
    let response = redirect_found("https://example.com/\nbad");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to generate static map");
}
