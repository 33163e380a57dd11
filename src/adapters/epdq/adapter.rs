//! ePDQ Direct Link gateway adapter.
//!
//! Turns generic transaction content into a Direct Link authorization request,
//! posts it through a `TransportClient` and converts the XML answer into a
//! `TransactionResult`.
//!
//! # Usage
//!
//! ```ignore
//! let mut adapter = EpdqAdapter::new(Arc::new(ReqwestTransport::new(timeout)?));
//! adapter.configure(true); // test environment
//!
//! let result = adapter.submit(&mut transaction).await?;
//! ```

use std::sync::Arc;

use secrecy::SecretString;

use crate::config::GatewayConfig;
use crate::domain::{
    to_gateway_expiration, to_minor_units, GatewayError, PostData, Transaction,
    TransactionResult,
};
use crate::ports::{Endpoint, FieldStore, TransportClient};

use super::endpoint::GatewayEnvironment;
use super::field_map::{resolve_action, FIELD_MAP, POST_FIELDS, REQUIRED_FIELDS, SHASIGN};
use super::response::GatewayResponse;
use super::signing::sign;

/// Direct Link authorization adapter.
pub struct EpdqAdapter {
    endpoint: Endpoint,
    transport: Arc<dyn TransportClient>,
}

impl EpdqAdapter {
    /// Create an adapter targeting the production endpoint.
    pub fn new(transport: Arc<dyn TransportClient>) -> Self {
        Self {
            endpoint: GatewayEnvironment::Production.endpoint(),
            transport,
        }
    }

    /// Create an adapter from gateway configuration.
    pub fn from_config(config: &GatewayConfig, transport: Arc<dyn TransportClient>) -> Self {
        let mut adapter = Self::new(transport);
        adapter.configure(config.test_mode);
        adapter
    }

    /// Target a custom endpoint (local gateway simulators).
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Select the test or production endpoint. The last call wins.
    pub fn configure(&mut self, use_test_environment: bool) {
        self.endpoint = GatewayEnvironment::from_test_flag(use_test_environment).endpoint();
        tracing::debug!(url = %self.endpoint.url(), "Gateway endpoint configured");
    }

    /// Currently targeted endpoint.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Normalize `action`, `amount` and `expiration` in place.
    ///
    /// Unknown actions pass through unchanged. Amount and expiration must be
    /// present and well-formed.
    pub fn normalize<S: FieldStore + ?Sized>(&self, content: &mut S) -> Result<(), GatewayError> {
        if let Some(action) = content.field("action") {
            let code = resolve_action(action).to_string();
            if code == action {
                tracing::debug!(action = %action, "Action not in action map, passing through");
            }
            content.set_field("action", code);
        }

        let amount = to_minor_units(content.field("amount").unwrap_or_default())?;
        content.set_field("amount", amount);

        let expiration = to_gateway_expiration(content.field("expiration").unwrap_or_default())?;
        content.set_field("expiration", expiration);

        Ok(())
    }

    /// Build the gateway form fields from normalized content.
    ///
    /// Checks required fields, maps generic names to gateway names, drops
    /// anything outside the whitelist and replaces the `SHASIGN` secret with
    /// the computed signature.
    pub fn build_request<S: FieldStore + ?Sized>(
        &self,
        content: &S,
    ) -> Result<PostData, GatewayError> {
        if let Some(missing) = REQUIRED_FIELDS
            .iter()
            .find(|name| content.non_empty_field(name).is_none())
        {
            return Err(GatewayError::MissingRequiredField(*missing));
        }

        let mut post = PostData::new();
        for (generic, gateway) in FIELD_MAP {
            if let Some(value) = content.field(generic) {
                post.insert(*gateway, value);
            }
        }
        post.retain_only(POST_FIELDS);

        let secret = post
            .get(SHASIGN)
            .filter(|secret| !secret.is_empty())
            .map(|secret| SecretString::new(secret.to_string()));

        if let Some(secret) = secret {
            let signature = sign(&post, &secret);
            post.insert(SHASIGN, signature);
        }

        Ok(post)
    }

    /// Run the full authorization pipeline and record the result on
    /// `transaction`.
    ///
    /// The transaction's own content is left as supplied, so submitting again
    /// re-runs every step.
    pub async fn submit<'t>(
        &self,
        transaction: &'t mut Transaction,
    ) -> Result<&'t TransactionResult, GatewayError> {
        let mut content = transaction.content().clone();
        self.normalize(&mut content)?;
        let post = self.build_request(&content)?;

        tracing::debug!(url = %self.endpoint.url(), post_data = ?post, "Submitting authorization");

        let response = self.transport.https_post(&self.endpoint, &post).await?;

        tracing::debug!(
            status_line = %response.status_line,
            body = %response.body,
            "Gateway response received"
        );

        let parsed = GatewayResponse::parse(&response.body).map_err(|e| {
            tracing::warn!(error = %e, status_line = %response.status_line, "Unparseable gateway response");
            e
        })?;

        let result = if parsed.is_authorized() {
            tracing::info!(pay_id = ?parsed.pay_id(), "Authorization approved");
            TransactionResult::approved(
                parsed.acceptance().map(str::to_string),
                parsed.pay_id().map(str::to_string),
                response.body,
                response.headers,
            )
        } else {
            tracing::info!(
                status = ?parsed.status(),
                nc_error = ?parsed.nc_error(),
                "Authorization declined"
            );
            TransactionResult::declined(
                parsed.acceptance().map(str::to_string),
                parsed.failure_message(),
                response.body,
                response.headers,
            )
        };

        Ok(transaction.record(result))
    }
}
