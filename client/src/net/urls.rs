//! Same-origin URL builders for the places proxy routes.
//!
//! Pure functions, no I/O. Credentials are appended server-side by the proxy
//! routes; nothing here ever sees them.

#[cfg(test)]
#[path = "urls_test.rs"]
mod urls_test;

pub const DEFAULT_MAP_WIDTH: u32 = 800;
pub const DEFAULT_MAP_HEIGHT: u32 = 400;
pub const DEFAULT_PHOTO_MAX_WIDTH: u32 = 800;

/// Build the same-origin static-map URL for an address.
/// Returns `None` when the address is absent or empty.
#[must_use]
pub fn static_map_url(address: Option<&str>, width: Option<u32>, height: Option<u32>) -> Option<String> {
    let address = address.filter(|value| !value.is_empty())?;
    let width = width.unwrap_or(DEFAULT_MAP_WIDTH);
    let height = height.unwrap_or(DEFAULT_MAP_HEIGHT);
    Some(format!(
        "/api/places/static-map?address={}&width={width}&height={height}",
        urlencoding::encode(address)
    ))
}

/// Build the same-origin photo URL for a place identifier.
/// Returns `None` when the identifier is absent or empty.
#[must_use]
pub fn place_photo_url(place_id: Option<&str>, max_width: Option<u32>) -> Option<String> {
    let place_id = place_id.filter(|value| !value.is_empty())?;
    let max_width = max_width.unwrap_or(DEFAULT_PHOTO_MAX_WIDTH);
    Some(format!(
        "/api/places/photo?place_id={}&maxwidth={max_width}",
        urlencoding::encode(place_id)
    ))
}
