//! Notification seam for success/error/confirmation dialogs
//!
//! The concrete popup presentation belongs to the UI layer and is out of
//! scope here; the default implementation logs through tracing and answers
//! confirmations with a configured default.

use async_trait::async_trait;

/// User-facing notification surface
#[async_trait]
pub trait Notifier: Send + Sync {
    fn success(&self, title: &str, text: &str);
    fn error(&self, title: &str, text: &str);
    /// Ask the user to confirm a destructive action; `false` cancels it
    async fn confirm(&self, title: &str, text: &str) -> bool;
}

/// Headless notifier backed by tracing
pub struct TracingNotifier {
    assume_yes: bool,
}

impl TracingNotifier {
    /// Confirmations are declined, so destructive actions stay no-ops
    /// outside a real UI
    pub fn new() -> Self {
        Self { assume_yes: false }
    }

    /// Answer every confirmation affirmatively (non-interactive runs)
    pub fn assume_yes() -> Self {
        Self { assume_yes: true }
    }
}

impl Default for TracingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    fn success(&self, title: &str, text: &str) {
        tracing::info!("{}: {}", title, text);
    }

    fn error(&self, title: &str, text: &str) {
        tracing::error!("{}: {}", title, text);
    }

    async fn confirm(&self, title: &str, text: &str) -> bool {
        tracing::warn!("{}: {} (answering {})", title, text, self.assume_yes);
        self.assume_yes
    }
}
