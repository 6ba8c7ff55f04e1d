//! Shared wire types for the REST API.

use serde::{Deserialize, Serialize};

/// Current user as returned by the (external) auth provider's `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
