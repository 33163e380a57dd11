//! Mock transport for testing.
//!
//! Provides a configurable `TransportClient` for unit and integration tests.
//! Supports:
//! - Pre-configured response body, status line and headers
//! - Error injection
//! - Call tracking

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::PostData;
use crate::ports::{Endpoint, HttpResponse, TransportClient, TransportError};

/// Mock transport for testing.
///
/// Clones share state, so a test can keep one handle for assertions while the
/// adapter owns another.
///
/// # Example
///
/// ```ignore
/// let mock = MockTransport::new();
/// mock.set_response_body(r#"<ncresponse STATUS="9" NCERROR="0"/>"#);
///
/// let adapter = EpdqAdapter::new(Arc::new(mock.clone()));
/// adapter.submit(&mut tx).await?;
///
/// assert_eq!(mock.calls().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Body returned on success.
    body: String,

    /// Status line returned on success.
    status_line: Option<String>,

    /// Headers returned on success.
    headers: Vec<(String, String)>,

    /// Error to return instead of a response.
    error: Option<TransportError>,

    /// Track calls for assertions.
    calls: Vec<RecordedCall>,
}

/// Recorded `https_post` call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint: Endpoint,
    pub fields: PostData,
}

impl MockTransport {
    /// Create a mock returning an empty `200 OK` response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that always answers with `body`.
    pub fn responding(body: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.set_response_body(body);
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    pub fn set_response_body(&self, body: impl Into<String>) {
        self.inner.lock().unwrap().body = body.into();
    }

    pub fn set_status_line(&self, status_line: impl Into<String>) {
        self.inner.lock().unwrap().status_line = Some(status_line.into());
    }

    pub fn set_response_headers(&self, headers: Vec<(String, String)>) {
        self.inner.lock().unwrap().headers = headers;
    }

    /// Fail every following call with `error`.
    pub fn set_error(&self, error: TransportError) {
        self.inner.lock().unwrap().error = Some(error);
    }

    pub fn clear_error(&self) {
        self.inner.lock().unwrap().error = None;
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Assertion Helpers
    // ════════════════════════════════════════════════════════════════════════════

    /// All calls made so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Most recent call, if any.
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.inner.lock().unwrap().calls.last().cloned()
    }
}

#[async_trait]
impl TransportClient for MockTransport {
    async fn https_post(
        &self,
        endpoint: &Endpoint,
        fields: &PostData,
    ) -> Result<HttpResponse, TransportError> {
        let mut state = self.inner.lock().unwrap();

        state.calls.push(RecordedCall {
            endpoint: endpoint.clone(),
            fields: fields.clone(),
        });

        if let Some(error) = &state.error {
            return Err(error.clone());
        }

        Ok(HttpResponse {
            body: state.body.clone(),
            status_line: state
                .status_line
                .clone()
                .unwrap_or_else(|| "HTTP/1.1 200 OK".to_string()),
            headers: state.headers.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Endpoint {
        Endpoint::https("example.test", "/post")
    }

    #[tokio::test]
    async fn returns_configured_response() {
        let mock = MockTransport::responding("<ok/>");
        mock.set_status_line("HTTP/1.1 502 Bad Gateway");

        let response = mock.https_post(&endpoint(), &PostData::new()).await.unwrap();

        assert_eq!(response.body, "<ok/>");
        assert_eq!(response.status_line, "HTTP/1.1 502 Bad Gateway");
    }

    #[tokio::test]
    async fn records_calls_across_clones() {
        let mock = MockTransport::new();
        let handle = mock.clone();
        let mut fields = PostData::new();
        fields.insert("AMOUNT", "100");

        mock.https_post(&endpoint(), &fields).await.unwrap();

        let call = handle.last_call().unwrap();
        assert_eq!(call.endpoint.host, "example.test");
        assert_eq!(call.fields.get("AMOUNT"), Some("100"));
    }

    #[tokio::test]
    async fn injected_error_until_cleared() {
        let mock = MockTransport::new();
        mock.set_error(TransportError::Timeout);

        let result = mock.https_post(&endpoint(), &PostData::new()).await;
        assert_eq!(result.unwrap_err(), TransportError::Timeout);

        mock.clear_error();
        assert!(mock.https_post(&endpoint(), &PostData::new()).await.is_ok());
        assert_eq!(mock.calls().len(), 2);
    }
}
