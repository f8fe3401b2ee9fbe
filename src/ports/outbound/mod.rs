//! Outbound ports - contracts the infrastructure adapters must implement,
//! allowing application services to talk to the encyclopedia API without
//! depending on a concrete HTTP client.

pub mod api_port;

pub use api_port::{ApiError, CatalogApiPort};
