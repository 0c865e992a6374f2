//! `stallfront-checkout` — basket membership, order fields, and the
//! two-stage checkout validation state machine.

pub mod checkout;

pub use checkout::CheckoutStore;
