//! Query cache - keyed async-result cache over the catalog service.
//!
//! Mirrors the loading/data/error triple of a query client: the first
//! subscriber to a key starts the fetch, later subscribers share the entry,
//! and results are memoized until [`QueryCache::clear`] on logout. The
//! insert-before-spawn discipline in [`QueryCache::ensure`] is what bounds
//! each key to a single in-flight request.

use std::collections::HashMap;
use std::sync::Arc;

use dioxus::prelude::*;

use crate::application::services::CatalogService;
use crate::domain::CatalogEntry;

/// Cache key. Search terms are part of the key, so each distinct term gets
/// its own entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Pokemons,
    Search(String),
}

/// Observable state of one keyed query.
#[derive(Clone, Default)]
pub struct QueryEntry {
    pub data: Option<Arc<Vec<CatalogEntry>>>,
    pub error: Option<String>,
    pub is_loading: bool,
}

#[derive(Clone, Copy)]
pub struct QueryCache {
    entries: Signal<HashMap<QueryKey, QueryEntry>>,
}

impl QueryCache {
    /// Create an empty cache. Must run inside an active Dioxus runtime.
    pub fn new() -> Self {
        Self {
            entries: Signal::new(HashMap::new()),
        }
    }

    /// Current state of a key; an untouched key reads as idle and empty.
    ///
    /// Reading through the signal subscribes the calling component to cache
    /// updates.
    pub fn entry(&self, key: &QueryKey) -> QueryEntry {
        self.entries.read().get(key).cloned().unwrap_or_default()
    }

    /// Start the fetch for `key` unless one already ran or is running.
    ///
    /// `peek` keeps this from subscribing whatever effect calls it; only
    /// renders that read [`QueryCache::entry`] react to the result landing.
    pub fn ensure(&mut self, key: QueryKey, catalog: Arc<CatalogService>) {
        if self.entries.peek().contains_key(&key) {
            return;
        }
        self.entries.write().insert(
            key.clone(),
            QueryEntry {
                is_loading: true,
                ..Default::default()
            },
        );

        let mut entries = self.entries;
        spawn(async move {
            let result = match &key {
                QueryKey::Pokemons => catalog.list().await,
                QueryKey::Search(term) => catalog.search(term).await,
            };
            let resolved = match result {
                Ok(list) => QueryEntry {
                    data: Some(Arc::new(list)),
                    ..Default::default()
                },
                Err(error) => {
                    tracing::error!(%error, ?key, "catalog query failed");
                    QueryEntry {
                        error: Some(error.to_string()),
                        ..Default::default()
                    }
                }
            };
            entries.write().insert(key, resolved);
        });
    }

    /// Drop every memoized result. Part of the logout sequence; the session
    /// principal must already be cleared so no stale authenticated request
    /// repopulates the cache.
    pub fn clear(&mut self) {
        self.entries.write().clear();
    }
}
