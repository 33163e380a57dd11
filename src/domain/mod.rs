//! Domain layer containing gateway-independent payment types.
//!
//! # Module Organization
//!
//! - `errors` - Error taxonomy for request building and response handling
//! - `amount` - Decimal amount to minor-unit conversion
//! - `expiration` - Card expiration date validation and reformatting
//! - `transaction` - Transaction content, post data and results

mod amount;
mod errors;
mod expiration;
pub mod transaction;

pub use amount::{to_minor_units, MinorUnits};
pub use errors::GatewayError;
pub use expiration::{to_gateway_expiration, Expiration};
pub use transaction::{
    FailureStatus, PostData, Transaction, TransactionContent, TransactionResult,
};
