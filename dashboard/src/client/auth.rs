//! Auth session API client
//!
//! Wraps the hosted service's credential endpoints: password sign-in,
//! sign-up (optionally carrying profile metadata), sign-out, the cached
//! session, and a broadcast stream of session changes. Identity state
//! consumers follow the change stream rather than call return values.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use shared::models::UserMetadata;

use crate::error::{AppError, AppResult};

/// An authenticated identity as returned by the auth service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
    /// Profile metadata attached at creation time (first/last/full name)
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

/// An access-token session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

/// Session-change notification
#[derive(Debug, Clone)]
pub enum AuthChange {
    SignedIn(AuthUser),
    SignedOut,
}

/// Client for the hosted auth API
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    session: Arc<RwLock<Option<Session>>>,
    changes: broadcast::Sender<AuthChange>,
}

impl AuthClient {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: String,
        anon_key: String,
        session: Arc<RwLock<Option<Session>>>,
    ) -> Self {
        let (changes, _) = broadcast::channel(16);
        Self {
            http,
            base_url,
            anon_key,
            session,
            changes,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    /// Exchange credentials for a session. The new identity is announced on
    /// the change stream once the backend confirms.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<AuthUser> {
        let response = self
            .http
            .post(self.endpoint("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Auth(auth_message(&body)));
        }

        let session: Session = response
            .json()
            .await
            .map_err(|e| AppError::Decode(format!("session: {}", e)))?;
        let user = session.user.clone();
        *self.session.write().await = Some(session);
        let _ = self.changes.send(AuthChange::SignedIn(user.clone()));
        Ok(user)
    }

    /// Register a new identity, optionally attaching profile metadata
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: Option<&UserMetadata>,
    ) -> AppResult<()> {
        let mut body = json!({ "email": email, "password": password });
        if let Some(metadata) = metadata {
            body["data"] = serde_json::to_value(metadata)
                .map_err(|e| AppError::Decode(format!("user metadata: {}", e)))?;
        }

        let response = self
            .http
            .post(self.endpoint("signup"))
            .header("apikey", &self.anon_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Auth(auth_message(&body)));
        }
        Ok(())
    }

    /// Terminate the session. The cleared identity is announced on the
    /// change stream only after the backend confirms.
    pub async fn sign_out(&self) -> AppResult<()> {
        let token = match self.session.read().await.as_ref() {
            Some(session) => session.access_token.clone(),
            None => return Ok(()),
        };

        let response = self
            .http
            .post(self.endpoint("logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Auth(auth_message(&body)));
        }

        *self.session.write().await = None;
        let _ = self.changes.send(AuthChange::SignedOut);
        Ok(())
    }

    /// The cached session, if any
    pub async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Subscribe to session-change notifications
    pub fn on_auth_state_change(&self) -> broadcast::Receiver<AuthChange> {
        self.changes.subscribe()
    }
}

/// Pull the human-readable message out of an auth error body, falling back
/// to the raw text
fn auth_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct AuthErrorBody {
        #[serde(alias = "msg", alias = "error_description")]
        message: Option<String>,
    }

    serde_json::from_str::<AuthErrorBody>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.to_string())
}
