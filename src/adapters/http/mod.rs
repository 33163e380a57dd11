//! `TransportClient` implementations.
//!
//! - `ReqwestTransport` - HTTPS client used against the real gateway
//! - `MockTransport` - Scripted transport for tests

mod mock_transport;
mod reqwest_transport;

pub use mock_transport::{MockTransport, RecordedCall};
pub use reqwest_transport::ReqwestTransport;
