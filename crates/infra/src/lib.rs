//! `stallfront-infra` — transport boundary and end-to-end wiring tests.
//!
//! The stores and the bus are pure in-process state; this crate holds the
//! pieces that face the outside world: the order/catalog gateway contract
//! and an in-memory implementation for tests and development.

pub mod gateway;

pub use gateway::{GatewayConfig, InMemoryGateway, StorefrontGateway, TransportError};
