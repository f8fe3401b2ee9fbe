//! Auth service - the simulated credential exchange.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::Principal;
use crate::ports::outbound::CatalogApiPort;

pub struct AuthService {
    api: Arc<dyn CatalogApiPort>,
}

impl AuthService {
    pub fn new(api: Arc<dyn CatalogApiPort>) -> Self {
        Self { api }
    }

    /// Exchange credentials for a session principal.
    ///
    /// The backing endpoint is a mock that always succeeds after a short
    /// delay; validation of the credentials happens in the login form.
    pub async fn login(&self, email: &str, password: &str) -> Result<Principal> {
        self.api
            .mock_login(email, password)
            .await
            .context("login failed")
    }
}
