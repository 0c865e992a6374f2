//! Canonical event names announced on the bus.
//!
//! Store change events carry no data; subscribers re-read the store they
//! care about instead of diffing payloads.

use crate::order::FormField;

/// Catalog was replaced wholesale.
pub const CATALOG_CHANGED: &str = "catalog-changed";
/// Preview selection moved to a (resolvable) product.
pub const PREVIEW_CHANGED: &str = "preview-changed";

/// A genuinely new id entered the basket.
pub const ITEM_ADDED: &str = "item-added";
/// A present id left the basket.
pub const ITEM_REMOVED: &str = "item-removed";
/// Basket was emptied.
pub const BASKET_CLEARED: &str = "basket-cleared";

/// Delivery-stage validation messages were recomputed.
pub const DELIVERY_ERRORS_CHANGED: &str = "delivery-errors-changed";
/// Contact-stage validation messages were recomputed.
pub const CONTACT_ERRORS_CHANGED: &str = "contact-errors-changed";
/// Delivery stage crossed from Invalid to Valid.
pub const DELIVERY_READY: &str = "delivery-ready";
/// Contact stage crossed from Invalid to Valid.
pub const CONTACT_READY: &str = "contact-ready";

/// The gateway accepted an order.
pub const ORDER_PLACED: &str = "order-placed";

/// Per-field input event name, e.g. `order.address:change`.
///
/// Delivery fields live on the `order.` prefix and contact fields on the
/// `contacts.` prefix, so presenters can subscribe per form with patterns
/// like `^order\..*:change`.
pub fn field_change(field: FormField) -> String {
    let form = match field.stage() {
        crate::order::FormStage::Delivery => "order",
        crate::order::FormStage::Contact => "contacts",
    };
    format!("{form}.{field}:change")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_change_names_follow_the_form_prefix() {
        assert_eq!(field_change(FormField::Address), "order.address:change");
        assert_eq!(field_change(FormField::Payment), "order.payment:change");
        assert_eq!(field_change(FormField::Phone), "contacts.phone:change");
        assert_eq!(field_change(FormField::Email), "contacts.email:change");
    }
}
