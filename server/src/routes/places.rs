//! Places proxy routes — static-map redirect and photo pass-through.
//!
//! SYSTEM CONTEXT
//! ==============
//! These handlers form the credential boundary: the Google key lives only in
//! `AppState`, is appended to upstream URLs by the maps service, and never
//! appears in response payloads or logs. The static-map route redirects the
//! browser upstream without ever downloading the image; the photo route
//! fetches upstream server-side so the key stays out of browser-visible URLs.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::services::maps;
use crate::state::AppState;

// =============================================================================
// STATIC MAP
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct StaticMapQuery {
    pub address: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

/// `GET /api/places/static-map` — 302 redirect to the upstream static-map
/// image for an address.
pub async fn static_map(State(state): State<AppState>, Query(query): Query<StaticMapQuery>) -> Response {
    let Some(address) = non_empty(query.address.as_deref()) else {
        return error_response(StatusCode::BAD_REQUEST, "address is required", None);
    };
    let Some(places) = &state.places else {
        return missing_key_response();
    };

    let width = maps::parse_dimension(query.width.as_deref(), maps::DEFAULT_MAP_WIDTH);
    let height = maps::parse_dimension(query.height.as_deref(), maps::DEFAULT_MAP_HEIGHT);

    match maps::static_map_target(address, width, height, &places.api_key) {
        Ok(target) => redirect_found(&target),
        Err(e) => {
            tracing::error!(error = %e, "static map construction failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate static map",
                Some(e.to_string()),
            )
        }
    }
}

// =============================================================================
// PLACE PHOTO
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct PhotoQuery {
    pub place_id: Option<String>,
    pub maxwidth: Option<String>,
}

/// `GET /api/places/photo` — fetch the place photo upstream and forward the
/// bytes, keeping the credential server-side.
pub async fn photo(State(state): State<AppState>, Query(query): Query<PhotoQuery>) -> Response {
    let Some(place_id) = non_empty(query.place_id.as_deref()) else {
        return error_response(StatusCode::BAD_REQUEST, "place_id is required", None);
    };
    let Some(places) = &state.places else {
        return missing_key_response();
    };

    let max_width = maps::parse_dimension(query.maxwidth.as_deref(), maps::DEFAULT_PHOTO_MAX_WIDTH);
    let target = maps::photo_target(place_id, max_width, &places.api_key);

    match maps::fetch_photo(&state.http, &target).await {
        Ok(payload) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, payload.content_type),
                (header::CACHE_CONTROL, "public, max-age=86400".to_owned()),
            ],
            payload.bytes,
        )
            .into_response(),
        Err(e) => photo_failure_response(&e),
    }
}

/// `502 Bad Gateway` for an upstream photo failure. `MapsError` text carries
/// only status codes or URL-stripped transport messages, so the credential
/// embedded in the upstream URL cannot reach the payload.
fn photo_failure_response(error: &maps::MapsError) -> Response {
    tracing::error!(error = %error, "place photo fetch failed");
    error_response(StatusCode::BAD_GATEWAY, "Failed to fetch place photo", Some(error.to_string()))
}

// =============================================================================
// RESPONSE HELPERS
// =============================================================================

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn missing_key_response() -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Google Places API key not configured", None)
}

/// Structured JSON error body: `{"error": ...}` plus optional `details`.
fn error_response(status: StatusCode, message: &str, details: Option<String>) -> Response {
    let body = match details {
        Some(details) => serde_json::json!({ "error": message, "details": details }),
        None => serde_json::json!({ "error": message }),
    };
    (status, Json(body)).into_response()
}

/// `302 Found` with a `Location` header. Axum's `Redirect` only offers
/// 303/307/308 and this route's contract is a plain 302.
fn redirect_found(target: &str) -> Response {
    match header::HeaderValue::from_str(target) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Err(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to generate static map",
            Some("target URL is not a valid header value".to_owned()),
        ),
    }
}

#[cfg(test)]
#[path = "places_test.rs"]
mod tests;
