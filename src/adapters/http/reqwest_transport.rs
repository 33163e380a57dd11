//! HTTPS transport backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::PostData;
use crate::ports::{Endpoint, HttpResponse, TransportClient, TransportError};

/// Production transport posting forms with a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .https_only(true)
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;

        Ok(Self { http_client })
    }

    /// Wrap an existing client.
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

fn map_send_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_builder() {
        TransportError::InvalidEndpoint(error.to_string())
    } else {
        TransportError::Network(error.to_string())
    }
}

fn format_status_line(version: reqwest::Version, status: reqwest::StatusCode) -> String {
    format!("{:?} {}", version, status)
}

#[async_trait]
impl TransportClient for ReqwestTransport {
    async fn https_post(
        &self,
        endpoint: &Endpoint,
        fields: &PostData,
    ) -> Result<HttpResponse, TransportError> {
        let url = endpoint.url();

        let response = self
            .http_client
            .post(&url)
            .form(fields.as_map())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %url, error = %e, "Gateway request failed");
                map_send_error(e)
            })?;

        let status_line = format_status_line(response.version(), response.status());
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse {
            body,
            status_line,
            headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_timeout() {
        assert!(ReqwestTransport::new(Duration::from_secs(30)).is_ok());
    }

    #[test]
    fn status_line_format() {
        assert_eq!(
            format_status_line(reqwest::Version::HTTP_11, reqwest::StatusCode::OK),
            "HTTP/1.1 200 OK"
        );
        assert_eq!(
            format_status_line(reqwest::Version::HTTP_2, reqwest::StatusCode::BAD_GATEWAY),
            "HTTP/2.0 502 Bad Gateway"
        );
    }

    #[tokio::test]
    async fn unresolvable_host_is_network_error() {
        let transport = ReqwestTransport::new(Duration::from_secs(2)).unwrap();
        let endpoint = Endpoint::https("gateway.invalid", "/ncol/test/orderdirect.asp");

        let result = transport.https_post(&endpoint, &PostData::new()).await;

        assert!(matches!(
            result,
            Err(TransportError::Network(_)) | Err(TransportError::Timeout)
        ));
    }
}
