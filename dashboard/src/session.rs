//! Application-scoped auth session provider
//!
//! Holds the current authenticated identity for the whole process.
//! Constructed once at startup, passed by reference to every consumer, and
//! torn down explicitly to release the backend's change subscription.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{broadcast, Mutex, RwLock};
use tokio::task::JoinHandle;

use shared::models::UserMetadata;

use crate::client::{AuthChange, AuthUser};
use crate::error::AppResult;
use crate::notify::Notifier;
use crate::store::AuthBackend;

pub struct SessionProvider {
    auth: Arc<dyn AuthBackend>,
    notifier: Arc<dyn Notifier>,
    user: Arc<RwLock<Option<AuthUser>>>,
    loading: AtomicBool,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl SessionProvider {
    pub fn new(auth: Arc<dyn AuthBackend>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            auth,
            notifier,
            user: Arc::new(RwLock::new(None)),
            loading: AtomicBool::new(true),
            listener: Mutex::new(None),
        }
    }

    /// Initialize from any existing session, then follow the change stream
    /// for the remainder of the process. The UI must not render while
    /// `is_loading` is still true.
    pub async fn start(&self) {
        let existing = self.auth.current_session().await;
        *self.user.write().await = existing.map(|s| s.user);
        self.loading.store(false, Ordering::SeqCst);

        let mut changes = self.auth.subscribe();
        let user = Arc::clone(&self.user);
        let handle = tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    Ok(AuthChange::SignedIn(identity)) => {
                        *user.write().await = Some(identity);
                    }
                    Ok(AuthChange::SignedOut) => {
                        *user.write().await = None;
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("Session listener lagged, skipped {skipped} changes");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });
        *self.listener.lock().await = Some(handle);
    }

    /// Release the change subscription; called at process teardown
    pub async fn shutdown(&self) {
        if let Some(handle) = self.listener.lock().await.take() {
            handle.abort();
        }
    }

    /// The current identity, if signed in
    pub async fn current_user(&self) -> Option<AuthUser> {
        self.user.read().await.clone()
    }

    /// True until the initial session check has resolved
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Credential sign-in. Identity state updates via the change stream once
    /// the backend confirms, not from this call's return value.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<()> {
        match self.auth.sign_in(email, password).await {
            Ok(_) => Ok(()),
            Err(err) => {
                self.notifier.error("Sign-in failed", &err.user_message());
                Err(err)
            }
        }
    }

    /// Self-service registration; unused by the main UI flow but part of
    /// the contract
    pub async fn sign_up(&self, email: &str, password: &str) -> AppResult<()> {
        self.auth.sign_up(email, password, None).await
    }

    /// Admin-driven provisioning with profile metadata attached to the new
    /// identity
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        metadata: UserMetadata,
    ) -> AppResult<()> {
        self.auth.sign_up(email, password, Some(metadata)).await
    }

    /// Prompt for confirmation, then terminate the session. A decline is a
    /// no-op; the cleared identity arrives via the change stream.
    pub async fn sign_out(&self) {
        let confirmed = self
            .notifier
            .confirm("Sign out", "Are you sure you want to sign out?")
            .await;
        if !confirmed {
            return;
        }

        match self.auth.sign_out().await {
            Ok(()) => self
                .notifier
                .success("Signed out", "Your session has ended."),
            Err(err) => self.notifier.error("Sign-out failed", &err.user_message()),
        }
    }
}
