//! Pokédex - composition root binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::infrastructure::{ApiAdapter, TokenStore};
use pokedex::ports::outbound::CatalogApiPort;
use pokedex::presentation::Services;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pokédex");

    // The token store is shared between the session state (writer) and the
    // HTTP adapter (reader), so every request after login carries the bearer
    // token.
    let tokens = TokenStore::default();
    let api: Arc<dyn CatalogApiPort> = Arc::new(ApiAdapter::new(tokens.clone()));

    dioxus::LaunchBuilder::new()
        .with_context(tokens)
        .with_context(Services::new(api))
        .launch(pokedex::app);
}
