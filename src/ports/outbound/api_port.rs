//! Catalog API port - object-safe boundary to the encyclopedia backend.
//!
//! The UI and application layer hold this behind `Arc<dyn CatalogApiPort>`;
//! the reqwest adapter in `infrastructure::http_client` is the production
//! implementation and tests substitute a mock.

use crate::domain::{CatalogPage, PokemonDetails, Principal};

/// Transport-level failure of an API call. The caller decides policy; nothing
/// is retried at this layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from {path}")]
    Status {
        status: reqwest::StatusCode,
        path: String,
    },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogApiPort: Send + Sync {
    /// Fetch the entire catalog index in one request.
    ///
    /// Callers must not assume pagination at this layer; the upstream limit
    /// of 2000 covers the current catalog size.
    async fn list_catalog(&self) -> Result<CatalogPage, ApiError>;

    /// Fetch one creature's detail record by its lowercase, URL-safe name.
    async fn fetch_detail(&self, name: &str) -> Result<PokemonDetails, ApiError>;

    /// Simulated credential exchange: no network, a ~1 second delay, then a
    /// constant token paired with the given email. Always succeeds.
    async fn mock_login(&self, email: &str, password: &str) -> Result<Principal, ApiError>;
}
