//! HTTP API for the TrueRate calculator.
//!
//! Thin axum layer over [`truerate_engine`]: it parses JSON request bodies,
//! invokes the pure evaluation function, and formats results or validation
//! messages. It also serves the static TDU delivery-fee table, the
//! zip-to-TDU guess used to pre-fill the calculator, and the lead-capture
//! forward. No request state is shared beyond the config and an HTTP client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod subscribe;
mod tdu;

pub use api::{AppState, router};
pub use config::ServerConfig;
pub use subscribe::{Lead, forward_lead};
pub use tdu::{DeliveryFees, Tdu};
