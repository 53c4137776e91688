//! REST API client for the gallery backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call returns
//! `ApiError::Unavailable` since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies each map to an
//! `ApiError` variant. Failures are logged here and returned; the controller
//! decides which message the user sees.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Image, ImageQuery};
use crate::config::GalleryConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: u16 },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// The two read-only calls the gallery needs.
///
/// Implementations must not touch session state; callers store results.
pub trait GalleryApi {
    /// Fetch every known category name.
    async fn fetch_categories(&self) -> Result<Vec<String>, ApiError>;

    /// Fetch images matching `query`.
    async fn fetch_images(&self, query: &ImageQuery) -> Result<Vec<Image>, ApiError>;
}

/// `GalleryApi` over browser `fetch`.
#[derive(Clone, Debug)]
pub struct HttpApi {
    categories_endpoint: String,
    images_endpoint: String,
}

impl HttpApi {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            categories_endpoint: config.categories_endpoint.clone(),
            images_endpoint: config.images_endpoint.clone(),
        }
    }
}

impl GalleryApi for HttpApi {
    async fn fetch_categories(&self) -> Result<Vec<String>, ApiError> {
        get_json::<Vec<String>>(&self.categories_endpoint, &[])
            .await
            .inspect_err(|e| leptos::logging::error!("{}", fetch_failed_message("categories", e)))
    }

    async fn fetch_images(&self, query: &ImageQuery) -> Result<Vec<Image>, ApiError> {
        get_json::<Vec<Image>>(&self.images_endpoint, &query.pairs())
            .await
            .inspect_err(|e| leptos::logging::error!("{}", fetch_failed_message("images", e)))
    }
}

fn fetch_failed_message(what: &str, err: &ApiError) -> String {
    format!("error fetching {what}: {err}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(endpoint: &str, status: u16) -> ApiError {
    ApiError::Status { endpoint: endpoint.to_owned(), status }
}

async fn get_json<T>(endpoint: &str, query: &[(&str, &str)]) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get(endpoint);
        if !query.is_empty() {
            request = request.query(query.iter().copied());
        }
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(endpoint, resp.status()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, query);
        Err(ApiError::Unavailable)
    }
}
