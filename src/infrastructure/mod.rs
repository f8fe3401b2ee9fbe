//! Infrastructure adapters - concrete implementations of the outbound ports.

pub mod http_client;

pub use http_client::{ApiAdapter, TokenStore};
