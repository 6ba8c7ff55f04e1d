//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the places credential (parsed once at startup) and the reqwest
//! client used for upstream photo fetches. Handlers never touch the
//! environment themselves, which keeps them deterministic under test.

use crate::config::PlacesConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all fields are cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Places credential. `None` until `GOOGLE_PLACES_API_KEY` is set; the
    /// proxy routes answer with a configuration error in that case.
    pub places: Option<PlacesConfig>,
    /// HTTP client for upstream photo fetches.
    pub http: reqwest::Client,
}

impl AppState {
    #[must_use]
    pub fn new(places: Option<PlacesConfig>, http: reqwest::Client) -> Self {
        Self { places, http }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
