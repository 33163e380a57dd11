//! ePDQ Direct Link - Payment Gateway Adapter
//!
//! This crate translates generic transaction content into authorization
//! requests for the Barclaycard ePDQ Direct Link API, signs them with the
//! SHA-IN scheme, and interprets the gateway's XML answer as a generic
//! success or failure.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use epdq_directlink::adapters::{EpdqAdapter, ReqwestTransport};
//! use epdq_directlink::config::AppConfig;
//! use epdq_directlink::domain::{Transaction, TransactionContent};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//!
//! let transport = Arc::new(ReqwestTransport::new(config.gateway.timeout())?);
//! let adapter = EpdqAdapter::from_config(&config.gateway, transport);
//!
//! let mut content = TransactionContent::new()
//!     .with("action", "Normal Authorization")
//!     .with("amount", "49.95")
//!     .with("currency", "GBP")
//!     .with("card_number", "4111111111111111")
//!     .with("expiration", "05/27");
//! config.gateway.apply_to(&mut content);
//!
//! let mut transaction = Transaction::new(content);
//! let result = adapter.submit(&mut transaction).await?;
//! println!("approved: {}", result.is_success);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
