//! Reusable view components shared across pages.

pub mod header;
pub mod toast;
