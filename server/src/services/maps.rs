//! Upstream Google Static Maps / Places URL construction and photo fetching.
//!
//! DESIGN
//! ======
//! URL construction is pure and unit-tested; the only I/O lives in
//! `fetch_photo`. The credential is appended to upstream URLs here and
//! nowhere else, and no error produced by this module ever contains it —
//! transport errors are stripped of their URL before being stringified.

use std::time::Duration;

use thiserror::Error;

pub const STATIC_MAP_BASE_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";
pub const PHOTO_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/photo";

pub const STATIC_MAP_ZOOM: u32 = 15;
pub const DEFAULT_MAP_WIDTH: u32 = 800;
pub const DEFAULT_MAP_HEIGHT: u32 = 400;
pub const DEFAULT_PHOTO_MAX_WIDTH: u32 = 800;

/// Upstream cap on Static Maps request URLs.
pub const MAX_TARGET_URL_LEN: usize = 16_384;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Error)]
pub enum MapsError {
    #[error("target URL length {len} exceeds the {MAX_TARGET_URL_LEN} character limit")]
    TargetTooLong { len: usize },
    /// Transport-level failure. Holds only the error text with the request
    /// URL stripped — the URL carries the credential.
    #[error("photo request failed: {0}")]
    PhotoRequest(String),
    #[error("photo upstream returned status {status}")]
    PhotoUpstream { status: u16 },
}

// =============================================================================
// URL CONSTRUCTION
// =============================================================================

/// Parse an optional dimension query value, falling back to `default` when
/// absent, unparsable, or zero.
#[must_use]
pub fn parse_dimension(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|&value| value > 0)
        .unwrap_or(default)
}

/// Build the upstream static-map URL: the address appears as `center` and as
/// a single `markers` entry, zoom is fixed, size is `{width}x{height}`, and
/// the credential is appended last.
///
/// # Errors
///
/// Returns `MapsError::TargetTooLong` when the assembled URL exceeds the
/// upstream length cap.
pub fn static_map_target(address: &str, width: u32, height: u32, api_key: &str) -> Result<String, MapsError> {
    let encoded = urlencoding::encode(address);
    let target = format!(
        "{STATIC_MAP_BASE_URL}?center={encoded}&zoom={STATIC_MAP_ZOOM}&size={width}x{height}&markers={encoded}&key={api_key}"
    );
    if target.len() > MAX_TARGET_URL_LEN {
        return Err(MapsError::TargetTooLong { len: target.len() });
    }
    Ok(target)
}

/// Build the upstream place-photo URL for a photo reference.
#[must_use]
pub fn photo_target(place_id: &str, max_width: u32, api_key: &str) -> String {
    let encoded = urlencoding::encode(place_id);
    format!("{PHOTO_BASE_URL}?photo_reference={encoded}&maxwidth={max_width}&key={api_key}")
}

// =============================================================================
// PHOTO FETCH
// =============================================================================

/// HTTP client for upstream photo fetches, with request and connect timeouts.
///
/// # Errors
///
/// Returns the underlying reqwest error if the client cannot be built.
pub fn upstream_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
}

/// A fetched photo ready to forward to the browser.
#[derive(Debug)]
pub struct PhotoPayload {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Fetch a place photo from the upstream service.
///
/// # Errors
///
/// Returns `MapsError::PhotoRequest` on transport failure and
/// `MapsError::PhotoUpstream` on a non-success upstream status.
pub async fn fetch_photo(http: &reqwest::Client, target: &str) -> Result<PhotoPayload, MapsError> {
    let response = http
        .get(target)
        .send()
        .await
        .map_err(|e| MapsError::PhotoRequest(e.without_url().to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(MapsError::PhotoUpstream { status: status.as_u16() });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("image/jpeg")
        .to_owned();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| MapsError::PhotoRequest(e.without_url().to_string()))?
        .to_vec();

    Ok(PhotoPayload { content_type, bytes })
}

#[cfg(test)]
#[path = "maps_test.rs"]
mod tests;
