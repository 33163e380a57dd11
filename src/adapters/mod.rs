//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the gateway logic to external systems:
//! - `epdq` - ePDQ Direct Link request building and response handling
//! - `http` - `TransportClient` implementations (reqwest, mock)

pub mod epdq;
pub mod http;

pub use epdq::EpdqAdapter;
pub use http::{MockTransport, ReqwestTransport};
