//! Forwarding client for the external catalog REST API.
//!
//! DESIGN
//! ======
//! The browser only ever calls same-origin `/product` paths. This client
//! replays each call against `CATALOG_API_URL` and hands back status, content
//! type, and body untouched, so success and failure semantics stay the
//! upstream's.

use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use reqwest::Url;

use crate::config::UpstreamConfig;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The configured base URL cannot carry path segments.
    #[error("invalid upstream base URL: {0}")]
    InvalidBaseUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never got a response (connect failure, timeout, ...).
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The response body could not be read.
    #[error("upstream body read failed: {0}")]
    Body(String),
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "catalog upstream unavailable");
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// An upstream reply relayed to the browser as-is.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        match self.content_type {
            Some(value) => {
                response.headers_mut().insert(CONTENT_TYPE, value);
            }
            None => {
                response.headers_mut().remove(CONTENT_TYPE);
            }
        }
        response
    }
}

#[derive(Clone, Debug)]
pub struct CatalogUpstream {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogUpstream {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| UpstreamError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidBaseUrl(config.base_url.clone()));
        }
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    /// `{base}/product`, or `{base}/product/{id}` with `id` percent-encoded.
    #[must_use]
    pub fn product_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("product");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    /// Replay one call against the upstream. An empty `body` sends no body.
    pub async fn forward(
        &self,
        method: Method,
        url: Url,
        content_type: Option<&HeaderValue>,
        body: Bytes,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(value) = content_type {
            request = request.header(CONTENT_TYPE, value.clone());
        }
        if !body.is_empty() {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;
        let status = response.status();
        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Body(e.to_string()))?;

        tracing::debug!(%method, %url, status = status.as_u16(), "forwarded catalog request");
        Ok(UpstreamResponse { status, content_type, body })
    }
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
