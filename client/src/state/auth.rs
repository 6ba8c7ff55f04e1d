//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authentication provider itself lives outside this repo; this module
//! only models the resolved/unresolved status the layout shell renders from.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Three-state auth status derived from `AuthState`. Modeling "still
/// resolving" explicitly keeps identity-dependent rendering independent of
/// provider ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    /// Resolution pending — nothing identity-dependent may render yet.
    Unknown,
    Authenticated,
    Anonymous,
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        if self.loading {
            AuthStatus::Unknown
        } else if self.user.is_some() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Anonymous
        }
    }

    /// Mark resolution complete with the fetched user (or lack of one).
    /// There is no transition back to `Unknown`.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}

/// Whether the navigation header renders for a given auth status.
#[must_use]
pub fn shows_header(status: AuthStatus) -> bool {
    matches!(status, AuthStatus::Authenticated)
}
