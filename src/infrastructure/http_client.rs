//! HTTP adapter for the PokeAPI.
//!
//! One independent HTTPS request per call, no connection pinning beyond what
//! reqwest keeps internally. Every request carries `Authorization: Bearer`
//! when the shared [`TokenStore`] holds a session token.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::domain::{CatalogPage, PokemonDetails, Principal};
use crate::ports::outbound::{ApiError, CatalogApiPort};

/// Production base URL. All endpoints are hard-coded; there is no
/// environment configuration surface.
pub const BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Token returned by the simulated credential exchange.
const FAKE_JWT_TOKEN: &str = "fake-jwt-token";

/// Duration of the simulated login round trip.
const LOGIN_DELAY: Duration = Duration::from_secs(1);

/// Shared slot for the session bearer token.
///
/// The session store writes it on login/logout; the adapter reads it on every
/// outbound request. This mirrors how the session principal gates the
/// `Authorization` header without the adapter depending on UI state.
#[derive(Clone, Default)]
pub struct TokenStore(Arc<RwLock<Option<String>>>);

impl TokenStore {
    pub fn set(&self, token: &str) {
        if let Ok(mut slot) = self.0.write() {
            *slot = Some(token.to_string());
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.0.write() {
            *slot = None;
        }
    }

    pub fn bearer(&self) -> Option<String> {
        self.0.read().ok().and_then(|slot| slot.clone())
    }
}

/// reqwest-backed implementation of [`CatalogApiPort`].
pub struct ApiAdapter {
    client: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

impl ApiAdapter {
    pub fn new(tokens: TokenStore) -> Self {
        Self::with_base_url(BASE_URL, tokens)
    }

    /// Adapter pointed at an alternate base URL. Used by tests against a
    /// local stub server.
    pub fn with_base_url(base_url: impl Into<String>, tokens: TokenStore) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            tokens,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if let Some(token) = self.tokens.bearer() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                path: path.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl CatalogApiPort for ApiAdapter {
    async fn list_catalog(&self) -> Result<CatalogPage, ApiError> {
        self.get_json("/pokemon?limit=2000").await
    }

    async fn fetch_detail(&self, name: &str) -> Result<PokemonDetails, ApiError> {
        self.get_json(&format!("/pokemon/{name}")).await
    }

    async fn mock_login(&self, email: &str, _password: &str) -> Result<Principal, ApiError> {
        // Simulates the latency of a real credential exchange; never fails.
        tokio::time::sleep(LOGIN_DELAY).await;
        Ok(Principal {
            email: email.to_string(),
            token: FAKE_JWT_TOKEN.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod token_store_tests {
        use super::*;

        #[test]
        fn starts_empty() {
            assert_eq!(TokenStore::default().bearer(), None);
        }

        #[test]
        fn set_then_clear_round_trips() {
            let tokens = TokenStore::default();
            tokens.set("abc");
            assert_eq!(tokens.bearer(), Some("abc".to_string()));
            tokens.clear();
            assert_eq!(tokens.bearer(), None);
        }

        #[test]
        fn clones_share_the_same_slot() {
            let tokens = TokenStore::default();
            let other = tokens.clone();
            tokens.set("shared");
            assert_eq!(other.bearer(), Some("shared".to_string()));
        }
    }

    mod request_header_tests {
        use super::*;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        const CATALOG_BODY: &str =
            r#"{"results":[{"name":"bulbasaur","url":"https://pokeapi.co/api/v2/pokemon/1/"}]}"#;

        /// Accepts one connection, returns the raw request text, and answers
        /// with a canned catalog page.
        async fn serve_one(listener: &TcpListener) -> String {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{CATALOG_BODY}",
                CATALOG_BODY.len(),
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).to_string()
        }

        #[tokio::test]
        async fn attaches_the_bearer_header_only_while_a_token_is_set() {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let tokens = TokenStore::default();
            let adapter = ApiAdapter::with_base_url(format!("http://{addr}"), tokens.clone());

            tokens.set("fake-jwt-token");
            let (request, page) = tokio::join!(serve_one(&listener), adapter.list_catalog());
            assert!(request.starts_with("GET /pokemon?limit=2000 HTTP/1.1"));
            assert!(request
                .to_ascii_lowercase()
                .contains("authorization: bearer fake-jwt-token"));
            assert_eq!(page.unwrap().results[0].name, "bulbasaur");

            tokens.clear();
            let (request, page) = tokio::join!(serve_one(&listener), adapter.list_catalog());
            assert!(!request.to_ascii_lowercase().contains("authorization:"));
            assert!(page.is_ok());
        }

        #[tokio::test]
        async fn a_non_success_status_surfaces_as_a_status_error() {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let adapter =
                ApiAdapter::with_base_url(format!("http://{addr}"), TokenStore::default());

            let server = async {
                let (mut stream, _) = listener.accept().await.unwrap();
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf).await.unwrap();
                stream
                    .write_all(b"HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
                    .await
                    .unwrap();
                stream.shutdown().await.unwrap();
            };
            let (_, result) = tokio::join!(server, adapter.fetch_detail("missingno"));
            match result {
                Err(ApiError::Status { status, path }) => {
                    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                    assert_eq!(path, "/pokemon/missingno");
                }
                other => panic!("expected a status error, got {other:?}"),
            }
        }
    }

    mod mock_login_tests {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn returns_the_constant_token_and_echoes_the_email() {
            let adapter = ApiAdapter::new(TokenStore::default());
            let principal = adapter
                .mock_login("ash@kanto.example", "pikachu")
                .await
                .unwrap();
            assert_eq!(principal.token, "fake-jwt-token");
            assert_eq!(principal.email, "ash@kanto.example");
        }
    }
}
