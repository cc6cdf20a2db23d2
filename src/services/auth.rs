//! Authentication gate.
//!
//! Clients authenticate with an opaque login secret issued at first login.
//! The gate only maps secrets to users; how the secret reaches the client
//! (magic link, QR code) is outside this crate.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::song::User;
use crate::store::UserStore;

/// Maps request credentials to users.
pub struct AuthService {
    users: Arc<dyn UserStore>,
}

impl AuthService {
    /// Create an authentication service over the given user store.
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Resolve a login secret to its user, or fail with `Unauthorized`.
    pub fn authenticate(&self, login_secret: &str) -> Result<User> {
        self.users.by_login_secret(login_secret).ok_or(Error::Unauthorized)
    }

    /// Get the user with the given e-mail, creating one on first login.
    pub fn get_or_create(&self, email: &str, name: &str) -> User {
        self.users.by_email(email).unwrap_or_else(|| {
            tracing::info!("Creating user for {email}");
            self.users.create(generate_login_secret(), email.to_string(), name.to_string())
        })
    }
}

/// Generate a fresh opaque login secret.
fn generate_login_secret() -> String {
    Uuid::new_v4().simple().to_string()
}
