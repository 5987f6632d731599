//! Runtime data loading for the directory page.

use galeria_core::Local;
use thiserror::Error;

/// Path of the store-list resource, relative to the site root.
pub const LOCALES_URL: &str = "/static/assets/data/locales.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("JSON parsing error: {0}")]
    Json(String),
}

/// Fetch and decode the store list.
///
/// This is the page's single network call; there is no retry and no
/// timeout, failure surfaces as an inline panel with a manual reload.
///
/// # Errors
/// Returns an error when the request fails, the server answers with a
/// non-success status, or the body is not a valid store list.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_locales(url: &str) -> Result<Vec<Local>, LoadError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|err| LoadError::Network(err.to_string()))?;
    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }
    resp.json::<Vec<Local>>()
        .await
        .map_err(|err| LoadError::Json(err.to_string()))
}
