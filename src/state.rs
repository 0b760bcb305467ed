//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no catalog data of its own; the only shared piece is the
//! upstream client, whose connection pool is internally reference-counted.

use crate::upstream::CatalogUpstream;

#[derive(Clone, Debug)]
pub struct AppState {
    pub upstream: CatalogUpstream,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: CatalogUpstream) -> Self {
        Self { upstream }
    }
}
