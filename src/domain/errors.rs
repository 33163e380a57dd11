//! Error types for the adapter.

use thiserror::Error;

use crate::ports::TransportError;

/// Errors that stop a submission before a transaction result is produced.
///
/// Gateway declines are not errors: they come back as a `TransactionResult`
/// with `is_success == false`.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Invalid amount format: '{0}' (expected digits with exactly two decimals)")]
    InvalidAmountFormat(String),

    #[error("Invalid expiration format: '{0}' (expected MM/YY)")]
    InvalidExpirationFormat(String),

    #[error("Required field missing: {0}")]
    MissingRequiredField(&'static str),

    #[error("Malformed gateway response: {0}")]
    MalformedResponse(String),

    #[error("Transport failed: {0}")]
    Transport(#[from] TransportError),
}

impl GatewayError {
    /// Creates a malformed response error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        GatewayError::MalformedResponse(reason.into())
    }

    /// True when the failure happened before anything was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GatewayError::InvalidAmountFormat(_)
                | GatewayError::InvalidExpirationFormat(_)
                | GatewayError::MissingRequiredField(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = GatewayError::MissingRequiredField("card_number");
        assert!(err.to_string().contains("card_number"));
    }

    #[test]
    fn transport_error_converts() {
        let err: GatewayError = TransportError::Timeout.into();
        assert!(matches!(err, GatewayError::Transport(TransportError::Timeout)));
        assert!(!err.is_validation());
    }

    #[test]
    fn validation_errors_are_flagged() {
        assert!(GatewayError::InvalidAmountFormat("1".into()).is_validation());
        assert!(GatewayError::InvalidExpirationFormat("1".into()).is_validation());
        assert!(!GatewayError::malformed("not xml").is_validation());
    }
}
