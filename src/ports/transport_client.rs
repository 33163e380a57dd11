//! Transport port for the outbound gateway call.
//!
//! The adapter never opens connections itself. It hands the form fields to a
//! `TransportClient`, which owns TLS, connection lifecycle and timeouts.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::PostData;

/// Port for posting URL-encoded forms over HTTPS.
#[async_trait]
pub trait TransportClient: Send + Sync {
    /// POST `fields` as `application/x-www-form-urlencoded` to `endpoint`.
    ///
    /// Non-2xx statuses are still responses; only failures to complete the
    /// exchange are errors.
    async fn https_post(
        &self,
        endpoint: &Endpoint,
        fields: &PostData,
    ) -> Result<HttpResponse, TransportError>;
}

/// Where a request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl Endpoint {
    /// HTTPS endpoint on the default port.
    pub fn https(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 443,
            path: path.into(),
        }
    }

    /// Override the port (local test servers).
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Full URL. The port is omitted when it is 443.
    pub fn url(&self) -> String {
        if self.port == 443 {
            format!("https://{}{}", self.host, self.path)
        } else {
            format!("https://{}:{}{}", self.host, self.port, self.path)
        }
    }
}

/// Raw response handed back by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Response body, undecoded.
    pub body: String,

    /// Status line, e.g. `HTTP/1.1 200 OK`.
    pub status_line: String,

    /// Response headers in arrival order.
    pub headers: Vec<(String, String)>,
}

/// Failures to complete an HTTP exchange.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}
