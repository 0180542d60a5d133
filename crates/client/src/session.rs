//! Explicit session state for the client.
//!
//! The views used to reach into ambient browser storage for the auth token;
//! here the session is an owned value with a defined read/write/clear
//! lifecycle, passed to whatever needs it.

use quickserve_core::errors::{QuickServeError, QuickServeResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Role attached to an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Provider,
    Admin,
}

/// Holds the bearer token and role for the logged-in user, if any.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    token: Option<String>,
    role: Option<Role>,
}

impl SessionStore {
    /// An empty, logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the session with freshly issued credentials.
    pub fn log_in(&mut self, token: String, role: Role) {
        debug!(?role, "session opened");
        self.token = Some(token);
        self.role = Some(role);
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Value for the `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns an authentication error when no one is logged in, which the
    /// views surface as a login prompt.
    pub fn bearer(&self) -> QuickServeResult<String> {
        self.token
            .as_deref()
            .map(|token| format!("Bearer {token}"))
            .ok_or_else(|| {
                QuickServeError::Authentication("Please login to continue".to_string())
            })
    }

    /// Ensures the session belongs to `role`.
    ///
    /// # Errors
    ///
    /// Authentication error when logged out, authorization error when the
    /// session carries a different role.
    pub fn require_role(&self, role: Role) -> QuickServeResult<()> {
        match self.role {
            None => Err(QuickServeError::Authentication(
                "Please login to continue".to_string(),
            )),
            Some(current) if current == role => Ok(()),
            Some(current) => Err(QuickServeError::Authorization(format!(
                "This page requires the {role:?} role, session has {current:?}"
            ))),
        }
    }

    /// Drops the credentials, returning the store to its logged-out state.
    pub fn clear(&mut self) {
        debug!("session cleared");
        self.token = None;
        self.role = None;
    }
}
