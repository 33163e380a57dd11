//! Generic outcome of a submission.

use std::fmt;

use serde::Serialize;

/// Classification attached to failed transactions.
///
/// The gateway's reason codes are not interpreted further; every negative
/// answer is a decline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStatus {
    Declined,
}

impl FailureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureStatus::Declined => "declined",
        }
    }
}

impl fmt::Display for FailureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result fields written back onto a transaction after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionResult {
    /// Whether the gateway authorized the payment.
    pub is_success: bool,

    /// Gateway acceptance code (`ACCEPTANCE`), if any.
    pub result_code: Option<String>,

    /// Gateway payment identifier (`PAYID`), set on success.
    pub authorization: Option<String>,

    /// Structured failure description, set on failure.
    pub error_message: Option<String>,

    /// Failure classification, set on failure.
    pub failure_status: Option<FailureStatus>,

    /// Raw response body, unmodified.
    pub server_response: String,

    /// Response headers as returned by the transport.
    pub response_headers: Vec<(String, String)>,
}

impl TransactionResult {
    /// An authorized payment.
    pub fn approved(
        result_code: Option<String>,
        authorization: Option<String>,
        server_response: String,
        response_headers: Vec<(String, String)>,
    ) -> Self {
        Self {
            is_success: true,
            result_code,
            authorization,
            error_message: None,
            failure_status: None,
            server_response,
            response_headers,
        }
    }

    /// A payment the gateway refused.
    pub fn declined(
        result_code: Option<String>,
        error_message: String,
        server_response: String,
        response_headers: Vec<(String, String)>,
    ) -> Self {
        Self {
            is_success: false,
            result_code,
            authorization: None,
            error_message: Some(error_message),
            failure_status: Some(FailureStatus::Declined),
            server_response,
            response_headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approved_has_no_failure_fields() {
        let result = TransactionResult::approved(
            Some("1234".into()),
            Some("98765".into()),
            "<ncresponse/>".into(),
            Vec::new(),
        );
        assert!(result.is_success);
        assert!(result.error_message.is_none());
        assert!(result.failure_status.is_none());
    }

    #[test]
    fn declined_is_classified() {
        let result = TransactionResult::declined(None, "Failed".into(), String::new(), Vec::new());
        assert!(!result.is_success);
        assert_eq!(result.failure_status, Some(FailureStatus::Declined));
        assert_eq!(FailureStatus::Declined.to_string(), "declined");
    }
}
