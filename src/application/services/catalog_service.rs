//! Catalog service - typed access to the creature encyclopedia.
//!
//! Search is implemented the way the upstream product does it: fetch the full
//! index once and filter client-side by case-insensitive substring. The query
//! cache on top of this service keeps repeat calls off the network.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::{CatalogEntry, PokemonDetails};
use crate::ports::outbound::CatalogApiPort;

pub struct CatalogService {
    api: Arc<dyn CatalogApiPort>,
}

impl CatalogService {
    pub fn new(api: Arc<dyn CatalogApiPort>) -> Self {
        Self { api }
    }

    /// The full catalog index.
    pub async fn list(&self) -> Result<Vec<CatalogEntry>> {
        let page = self
            .api
            .list_catalog()
            .await
            .context("failed to fetch the catalog index")?;
        Ok(page.results)
    }

    /// Catalog entries whose name contains `query`, case-insensitively.
    pub async fn search(&self, query: &str) -> Result<Vec<CatalogEntry>> {
        let needle = query.to_lowercase();
        let mut entries = self.list().await?;
        entries.retain(|entry| entry.name.to_lowercase().contains(&needle));
        Ok(entries)
    }

    /// One creature's detail record, fetched on demand and never cached here.
    pub async fn detail(&self, name: &str) -> Result<PokemonDetails> {
        self.api
            .fetch_detail(name)
            .await
            .with_context(|| format!("failed to fetch details for '{name}'"))
    }
}
