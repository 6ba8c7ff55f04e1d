//! Network layer: REST helpers, same-origin URL builders, and wire types.

pub mod api;
pub mod types;
pub mod urls;
