//! `stallfront-core` — shared storefront domain types.
//!
//! This crate contains **pure domain** data (no bus, no IO). The reactive
//! stores and the transport gateway all speak these types.

pub mod order;
pub mod payload;
pub mod product;
pub mod topics;

pub use order::{FormErrors, FormField, FormStage, OrderFields, OrderPayload, OrderReceipt};
pub use payload::EventPayload;
pub use product::{Product, ProductId};
