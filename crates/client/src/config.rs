//! # Client Configuration Module
//!
//! Resolves the QuickServe backend location from environment variables,
//! with defaults suited to local development.
//!
//! ## Environment Variables
//!
//! - `QUICKSERVE_API_BASE`: Base URL of the REST backend
//!   (default: "http://localhost:8080/api")
//! - `QUICKSERVE_REQUEST_TIMEOUT_SECONDS`: Request timeout hint for the
//!   HTTP layer (default: 30)

use eyre::{Result, WrapErr};
use std::env;
use tracing::debug;

/// Configuration for a QuickServe client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST backend, without a trailing slash
    pub api_base: String,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl ClientConfig {
    /// Creates a new ClientConfig from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `QUICKSERVE_REQUEST_TIMEOUT_SECONDS` is set but
    /// cannot be parsed as an integer.
    pub fn from_env() -> Result<Self> {
        let api_base = env::var("QUICKSERVE_API_BASE")
            .unwrap_or_else(|_| "http://localhost:8080/api".to_string());

        let request_timeout = env::var("QUICKSERVE_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .wrap_err("Invalid QUICKSERVE_REQUEST_TIMEOUT_SECONDS value")?;

        debug!(%api_base, "client configuration loaded");

        Ok(Self {
            api_base,
            request_timeout,
        })
    }

    /// URL of the booking-creation endpoint.
    pub fn bookings_url(&self) -> String {
        format!("{}/bookings", self.api_base.trim_end_matches('/'))
    }

    /// URL of the provider calendar-availability endpoint.
    pub fn calendar_url(&self) -> String {
        format!("{}/calendar", self.api_base.trim_end_matches('/'))
    }
}
