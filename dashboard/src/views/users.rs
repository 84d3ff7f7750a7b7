//! Users view: a single provisioning form
//!
//! Creates identities through the session provider; there is no listing,
//! editing or deletion of existing accounts.

use std::sync::Arc;

use validator::Validate;

use shared::models::NewUserForm;

use crate::notify::Notifier;
use crate::session::SessionProvider;

pub struct UsersView {
    session: Arc<SessionProvider>,
    notifier: Arc<dyn Notifier>,
    pub form: NewUserForm,
    pub submitting: bool,
}

impl UsersView {
    pub fn new(session: Arc<SessionProvider>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            session,
            notifier,
            form: NewUserForm::default(),
            submitting: false,
        }
    }

    /// Create the account. Success clears the form; failure keeps the input
    /// and shows the underlying message.
    pub async fn create(&mut self) -> bool {
        if let Err(errors) = self.form.validate() {
            self.notifier.error("Invalid user", &errors.to_string());
            return false;
        }

        self.submitting = true;
        let metadata = self.form.metadata();
        let result = self
            .session
            .create_user(&self.form.email, &self.form.password, metadata)
            .await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.notifier
                    .success("User created", "The account was registered.");
                self.form = NewUserForm::default();
                true
            }
            Err(err) => {
                self.notifier
                    .error("Failed to create user", &err.user_message());
                false
            }
        }
    }
}
