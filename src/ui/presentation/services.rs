//! Service providers for the presentation layer.
//!
//! The composition root builds a [`Services`] bundle around the API port and
//! hands it to Dioxus via `with_context`; components reach services through
//! the `use_*` hooks instead of depending on infrastructure types.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::application::services::{AuthService, CatalogService};
use crate::ports::outbound::CatalogApiPort;

/// All application services wrapped for context provision.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<AuthService>,
    pub catalog: Arc<CatalogService>,
}

impl Services {
    pub fn new(api: Arc<dyn CatalogApiPort>) -> Self {
        Self {
            auth: Arc::new(AuthService::new(api.clone())),
            catalog: Arc::new(CatalogService::new(api)),
        }
    }
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

pub fn use_auth_service() -> Arc<AuthService> {
    use_services().auth
}

pub fn use_catalog_service() -> Arc<CatalogService> {
    use_services().catalog
}
