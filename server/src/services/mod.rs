//! Service layer: upstream URL construction and photo fetching.

pub mod maps;
