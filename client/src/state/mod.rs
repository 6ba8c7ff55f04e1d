//! Shared reactive state provided as contexts by the root component.

pub mod auth;
