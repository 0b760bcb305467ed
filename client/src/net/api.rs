//! REST helpers for the `/product` catalog endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, same-origin so the
//! host server can forward them upstream.
//! Server-side (SSR): stubs returning an error since these calls are only
//! issued from the browser after mount.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>`. Callers treat `Err` as "leave the
//! list untouched"; nothing here panics on network or decode failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{NewProduct, Product};
#[cfg(feature = "hydrate")]
use super::types::{ProductEnvelope, ProductListEnvelope};

#[cfg(any(test, feature = "hydrate"))]
const PRODUCT_COLLECTION_ENDPOINT: &str = "/product";

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(id: &str) -> String {
    format!("{PRODUCT_COLLECTION_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} request failed: {status}")
}

/// Fetch every product via `GET /product`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not a `{ products }` envelope.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PRODUCT_COLLECTION_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("list", resp.status()));
        }
        let body: ProductListEnvelope = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.products)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a product via `POST /product` and return the server-assigned record.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not a `{ product }` envelope.
pub async fn create_product(draft: &NewProduct) -> Result<Product, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(PRODUCT_COLLECTION_ENDPOINT)
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("create", resp.status()));
        }
        let body: ProductEnvelope = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.product)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

/// Replace a product via `PATCH /product/{id}` with the full record.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a
/// non-OK status. The response body is ignored.
pub async fn update_product(product: &Product) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = product_endpoint(&product.id);
        let resp = gloo_net::http::Request::patch(&url)
            .json(product)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("update", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product;
        Err("not available on server".to_owned())
    }
}

/// Delete a product via `DELETE /product/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a
/// non-OK status.
pub async fn delete_product(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = product_endpoint(id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
