//! Spool HTTP Client
//!
//! A small, type-safe HTTP client for the print server that hands out
//! print jobs and accepts completion reports.
//!
//! Both endpoints take form-encoded POST bodies carrying the device
//! credentials. The lookup endpoint answers with JSON, the status endpoint
//! answers with free text that is only logged.
//!
//! # Example
//!
//! ```no_run
//! use spool_client::PrintServerClient;
//! use spool_core::domain::credentials::Credentials;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PrintServerClient::new(
//!         "http://localhost:8083/lookup",
//!         "http://localhost:8083/update",
//!         Credentials::new("ReceiptPrinterPi", "blueberry"),
//!     )?;
//!
//!     for job in client.lookup_jobs().await?.into_jobs() {
//!         client.report_status(&job).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use spool_core::dto::lookup::LookupResponse;
pub use spool_core::dto::status::StatusAck;

use reqwest::Client;
use serde::de::DeserializeOwned;
use spool_core::domain::credentials::Credentials;
use std::time::Duration;

/// Time allowed to establish a connection to the print server
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Time allowed for a whole request, body included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the print server endpoints
///
/// Holds the two endpoint URLs and the credentials sent with every call.
#[derive(Debug, Clone)]
pub struct PrintServerClient {
    /// Endpoint returning pending jobs
    lookup_url: String,
    /// Endpoint accepting completion reports
    status_url: String,
    /// Device credentials
    credentials: Credentials,
    /// HTTP client instance
    client: Client,
}

impl PrintServerClient {
    /// Create a new print server client with bounded timeouts
    ///
    /// # Arguments
    /// * `lookup_url` - Full URL of the lookup endpoint
    /// * `status_url` - Full URL of the status endpoint
    /// * `credentials` - Username/password sent with every request
    ///
    /// # Example
    /// ```
    /// use spool_client::PrintServerClient;
    /// use spool_core::domain::credentials::Credentials;
    ///
    /// let client = PrintServerClient::new(
    ///     "http://localhost:8083/lookup",
    ///     "http://localhost:8083/update",
    ///     Credentials::new("pi", "secret"),
    /// ).unwrap();
    /// assert_eq!(client.lookup_url(), "http://localhost:8083/lookup");
    /// ```
    pub fn new(
        lookup_url: impl Into<String>,
        status_url: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        Ok(Self::with_client(lookup_url, status_url, credentials, client))
    }

    /// Create a new print server client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        lookup_url: impl Into<String>,
        status_url: impl Into<String>,
        credentials: Credentials,
        client: Client,
    ) -> Self {
        Self {
            lookup_url: lookup_url.into(),
            status_url: status_url.into(),
            credentials,
            client,
        }
    }

    /// Get the lookup endpoint URL
    pub fn lookup_url(&self) -> &str {
        &self.lookup_url
    }

    /// Get the status endpoint URL
    pub fn status_url(&self) -> &str {
        &self.status_url
    }

    /// Get the credentials sent with every request
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// The body is read as text first so transport failures and malformed
    /// JSON surface as different errors.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is only kept for logging
    async fn handle_text_response(&self, response: reqwest::Response) -> Result<StatusAck> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let body = response.text().await?;
        Ok(StatusAck {
            status: status.as_u16(),
            body,
        })
    }
}
