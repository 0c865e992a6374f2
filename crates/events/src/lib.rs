//! `stallfront-events` — in-process publish/subscribe plumbing.
//!
//! Stores and views never reference each other directly; they announce and
//! observe named events through one shared [`EventBus`]. The bus is
//! single-threaded and dispatches synchronously (see `bus` module docs for
//! the re-entrancy contract).

pub mod bus;
pub mod model;
pub mod overlay;

pub use bus::{BusError, EventBus, SubscriptionId};
pub use model::ReactiveModel;
pub use overlay::Overlay;
