//! Payload merging for bound emitters.

use stallfront_core::EventPayload;

/// Payloads that can absorb call-site data over a preset base.
///
/// [`EventBus::bind`](crate::EventBus::bind) captures a base payload at
/// wiring time and overlays whatever the call site supplies at call time.
pub trait Overlay {
    /// Overlay `patch` onto `self`, producing the payload to emit.
    fn overlay(self, patch: Self) -> Self;
}

impl Overlay for EventPayload {
    /// The patch wins, with two exceptions: an `Empty` patch keeps the
    /// base, and a `FieldChange` patch over a `FieldChange` base keeps the
    /// base's field tag — the wiring site pins *which* field the emitter
    /// speaks for, the call site supplies the value.
    fn overlay(self, patch: Self) -> Self {
        match (self, patch) {
            (base, EventPayload::Empty) => base,
            (
                EventPayload::FieldChange { field, .. },
                EventPayload::FieldChange { value, .. },
            ) => EventPayload::FieldChange { field, value },
            (_, patch) => patch,
        }
    }
}
