//! Transactions: the caller-supplied content plus the latest outcome.

mod content;
mod post_data;
mod result;

pub use content::TransactionContent;
pub use post_data::PostData;
pub use result::{FailureStatus, TransactionResult};

/// A single payment request and, once submitted, its result.
///
/// Submitting again replaces the previous result.
#[derive(Debug, Clone, Default)]
pub struct Transaction {
    content: TransactionContent,
    result: Option<TransactionResult>,
}

impl Transaction {
    pub fn new(content: TransactionContent) -> Self {
        Self {
            content,
            result: None,
        }
    }

    pub fn content(&self) -> &TransactionContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut TransactionContent {
        &mut self.content
    }

    /// Latest result, `None` until submitted.
    pub fn result(&self) -> Option<&TransactionResult> {
        self.result.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.result.is_some()
    }

    pub fn is_success(&self) -> bool {
        self.result.as_ref().map_or(false, |r| r.is_success)
    }

    pub fn authorization(&self) -> Option<&str> {
        self.result.as_ref().and_then(|r| r.authorization.as_deref())
    }

    pub fn result_code(&self) -> Option<&str> {
        self.result.as_ref().and_then(|r| r.result_code.as_deref())
    }

    pub fn error_message(&self) -> Option<&str> {
        self.result.as_ref().and_then(|r| r.error_message.as_deref())
    }

    pub fn server_response(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.server_response.as_str())
    }

    /// Store the outcome of a submission, overwriting any earlier one.
    pub fn record(&mut self, result: TransactionResult) -> &TransactionResult {
        self.result.insert(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsubmitted_transaction_has_no_result() {
        let tx = Transaction::new(TransactionContent::new());
        assert!(!tx.is_submitted());
        assert!(!tx.is_success());
        assert!(tx.authorization().is_none());
    }

    #[test]
    fn record_overwrites_previous_result() {
        let mut tx = Transaction::default();
        tx.record(TransactionResult::declined(
            None,
            "Failed".into(),
            "first".into(),
            Vec::new(),
        ));
        tx.record(TransactionResult::approved(
            Some("A1".into()),
            Some("P1".into()),
            "second".into(),
            Vec::new(),
        ));

        assert!(tx.is_success());
        assert_eq!(tx.authorization(), Some("P1"));
        assert_eq!(tx.server_response(), Some("second"));
        assert!(tx.error_message().is_none());
    }
}
