//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! gateway adapter and the host it runs in. Adapters implement these ports.
//!
//! - `FieldStore` - Generic transaction field storage
//! - `TransportClient` - HTTPS form POST to the gateway

mod field_store;
mod transport_client;

pub use field_store::FieldStore;
pub use transport_client::{Endpoint, HttpResponse, TransportClient, TransportError};
