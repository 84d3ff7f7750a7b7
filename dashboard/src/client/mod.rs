//! Client for the hosted backend's table and auth APIs
//!
//! The backend itself (storage, row-level security, credential handling) is
//! an external collaborator; this module only builds requests against its
//! REST conventions and caches the auth session.

mod auth;
mod table;

pub use auth::{AuthChange, AuthClient, AuthUser, Session};
pub use table::{OrderDirection, TableQuery};

use std::sync::Arc;

use reqwest::Client;
use tokio::sync::RwLock;

use crate::config::BackendConfig;

/// A configured handle to the hosted data/auth service.
///
/// Cloning is cheap; all clones share the HTTP connection pool and the
/// cached auth session.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    anon_key: String,
    session: Arc<RwLock<Option<Session>>>,
    auth: AuthClient,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self::with_base_url(config.url.clone(), config.anon_key.clone())
    }

    /// Create a client against a custom base URL (for testing)
    pub fn with_base_url(base_url: String, anon_key: String) -> Self {
        let http = Client::new();
        let base_url = base_url.trim_end_matches('/').to_string();
        let session = Arc::new(RwLock::new(None));
        let auth = AuthClient::new(
            http.clone(),
            base_url.clone(),
            anon_key.clone(),
            Arc::clone(&session),
        );
        Self {
            http,
            base_url,
            anon_key,
            session,
            auth,
        }
    }

    /// Table-scoped query builder
    pub fn table(&self, name: &str) -> TableQuery {
        TableQuery::new(
            self.http.clone(),
            self.base_url.clone(),
            self.anon_key.clone(),
            Arc::clone(&self.session),
            name,
        )
    }

    /// Auth session API
    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }
}
