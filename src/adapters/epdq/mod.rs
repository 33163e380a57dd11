//! ePDQ Direct Link adapter.
//!
//! Implements credit card authorization against the Barclaycard ePDQ Direct
//! Link API (server-to-server, no browser redirect):
//! - Generic-to-gateway field mapping with a fixed whitelist
//! - Amount (minor units) and expiration (`MMYY`) normalization
//! - SHA-IN request signing (SHA-512)
//! - XML response interpretation
//!
//! # Security
//!
//! - The SHA-IN passphrase is never transmitted; only the digest is
//! - Card number, CVC, password and signature are masked in logs

mod adapter;
mod endpoint;
mod field_map;
mod response;
mod signing;

pub use adapter::EpdqAdapter;
pub use endpoint::{
    GatewayEnvironment, PRODUCTION_HOST, PRODUCTION_PATH, TEST_HOST, TEST_PATH,
};
pub use field_map::{resolve_action, ACTION_MAP, FIELD_MAP, POST_FIELDS, REQUIRED_FIELDS};
pub use response::GatewayResponse;
pub use signing::sign;
