//! Checkout form fields, validation stages, and the order snapshot sent to
//! the transport gateway.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::product::ProductId;

/// One of the two independently-validated checkout form groups.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStage {
    /// Payment method + delivery address.
    Delivery,
    /// Phone + email.
    Contact,
}

impl FormStage {
    /// Fields validated in this stage, in display order.
    pub fn fields(self) -> [FormField; 2] {
        match self {
            FormStage::Delivery => [FormField::Payment, FormField::Address],
            FormStage::Contact => [FormField::Phone, FormField::Email],
        }
    }
}

/// A single checkout form field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Payment,
    Address,
    Phone,
    Email,
}

impl FormField {
    /// The stage this field is validated in.
    pub fn stage(self) -> FormStage {
        match self {
            FormField::Payment | FormField::Address => FormStage::Delivery,
            FormField::Phone | FormField::Email => FormStage::Contact,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Payment => "payment",
            FormField::Address => "address",
            FormField::Phone => "phone",
            FormField::Email => "email",
        }
    }
}

impl core::fmt::Display for FormField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages for one stage.
///
/// Recomputed wholesale on every field write; an empty map means the stage
/// has no outstanding problems.
pub type FormErrors = BTreeMap<FormField, String>;

/// The four checkout inputs. Empty string means "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFields {
    pub payment: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl OrderFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Payment => &self.payment,
            FormField::Address => &self.address,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Payment => &mut self.payment,
            FormField::Address => &mut self.address,
            FormField::Phone => &mut self.phone,
            FormField::Email => &mut self.email,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Snapshot handed to the transport gateway when an order is submitted.
///
/// Assembled purely from in-memory state, so a failed submission can be
/// retried without re-deriving anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub payment: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub total: u64,
    pub items: Vec<ProductId>,
}

/// What the backend returns for an accepted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub id: Uuid,
    pub total: u64,
    pub placed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_belongs_to_exactly_one_stage() {
        for stage in [FormStage::Delivery, FormStage::Contact] {
            for field in stage.fields() {
                assert_eq!(field.stage(), stage);
            }
        }
    }

    #[test]
    fn set_and_get_are_symmetric() {
        let mut fields = OrderFields::default();
        fields.set(FormField::Phone, "+1 555 0100");
        assert_eq!(fields.get(FormField::Phone), "+1 555 0100");
        assert_eq!(fields.get(FormField::Email), "");
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut fields = OrderFields::default();
        fields.set(FormField::Payment, "online");
        fields.set(FormField::Email, "a@b.c");
        fields.clear();
        assert_eq!(fields, OrderFields::default());
    }
}
