//! `/product` routes forwarded to the catalog API.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method};

use crate::state::AppState;
use crate::upstream::{UpstreamError, UpstreamResponse};

/// `GET /product` — list products.
pub async fn list_products(State(state): State<AppState>) -> Result<UpstreamResponse, UpstreamError> {
    let url = state.upstream.product_url(None);
    state.upstream.forward(Method::GET, url, None, Bytes::new()).await
}

/// `POST /product` — create a product; the upstream assigns the `id`.
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<UpstreamResponse, UpstreamError> {
    let url = state.upstream.product_url(None);
    state
        .upstream
        .forward(Method::POST, url, headers.get(CONTENT_TYPE), body)
        .await
}

/// `PATCH /product/:id` — replace a product with the full record.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<UpstreamResponse, UpstreamError> {
    let url = state.upstream.product_url(Some(&id));
    state
        .upstream
        .forward(Method::PATCH, url, headers.get(CONTENT_TYPE), body)
        .await
}

/// `DELETE /product/:id` — delete a product.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<UpstreamResponse, UpstreamError> {
    let url = state.upstream.product_url(Some(&id));
    state.upstream.forward(Method::DELETE, url, None, Bytes::new()).await
}

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;
