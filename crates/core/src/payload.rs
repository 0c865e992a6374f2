//! Tagged event payloads.
//!
//! The bus routes by event name; this enum is the closed set of payload
//! shapes those names carry (see [`crate::topics`] for the name-to-payload
//! mapping).

use serde::{Deserialize, Serialize};

use crate::order::{FormErrors, FormField, OrderFields, OrderReceipt};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum EventPayload {
    /// Change notification with no data; subscribers re-read the store.
    #[default]
    Empty,
    /// Recomputed validation messages for one stage.
    Errors(FormErrors),
    /// Current checkout field values (ready events).
    Fields(OrderFields),
    /// A single form input changed at the UI.
    FieldChange { field: FormField, value: String },
    /// The gateway accepted an order.
    Receipt(OrderReceipt),
}

impl EventPayload {
    pub fn is_empty(&self) -> bool {
        matches!(self, EventPayload::Empty)
    }
}
