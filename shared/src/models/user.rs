//! Identity metadata attached at provisioning time
//!
//! The auth service owns the identity store; this client only shapes the
//! profile metadata sent along when an account is created.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Profile metadata stored on a newly created identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserMetadata {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

impl UserMetadata {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        let full_name = format!("{} {}", first_name, last_name).trim().to_string();
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            full_name,
        }
    }
}

/// Form for admin-driven account provisioning
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewUserForm {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl NewUserForm {
    pub fn metadata(&self) -> UserMetadata {
        UserMetadata::new(&self.first_name, &self.last_name)
    }
}
