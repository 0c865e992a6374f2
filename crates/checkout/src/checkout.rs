use std::rc::Rc;

use tracing::debug;

use stallfront_core::{
    EventPayload, FormErrors, FormField, FormStage, OrderFields, OrderPayload, Product, ProductId,
    topics,
};
use stallfront_events::{EventBus, ReactiveModel};

/// Basket contents plus the two-stage order/contact validation machine.
///
/// The basket is a duplicate-free id sequence (insertion order preserved
/// for display). The four checkout fields live in one record but are
/// validated in two independent groups: delivery (payment + address) and
/// contact (phone + email). Each stage is a tiny {Invalid, Valid} machine;
/// its ready event fires exactly on the Invalid→Valid edge, while the
/// errors-changed event fires on every field write in that stage.
///
/// Totals are computed against a caller-supplied catalog snapshot — this
/// store never reads the catalog store directly; cross-store coordination
/// is the presenter's job, mediated by bus events.
pub struct CheckoutStore {
    bus: Rc<EventBus<EventPayload>>,
    basket: Vec<ProductId>,
    fields: OrderFields,
    delivery_errors: FormErrors,
    contact_errors: FormErrors,
    delivery_valid: bool,
    contact_valid: bool,
}

impl ReactiveModel for CheckoutStore {
    type Payload = EventPayload;

    fn bus(&self) -> &Rc<EventBus<EventPayload>> {
        &self.bus
    }
}

fn required_message(field: FormField) -> &'static str {
    match field {
        FormField::Payment => "payment method is required",
        FormField::Address => "delivery address is required",
        FormField::Phone => "phone number is required",
        FormField::Email => "email address is required",
    }
}

impl CheckoutStore {
    pub fn new(bus: Rc<EventBus<EventPayload>>) -> Self {
        Self {
            bus,
            basket: Vec::new(),
            fields: OrderFields::default(),
            delivery_errors: FormErrors::new(),
            contact_errors: FormErrors::new(),
            delivery_valid: false,
            contact_valid: false,
        }
    }

    // ------------------------------------------------------------------
    // Basket
    // ------------------------------------------------------------------

    /// Add an id to the basket. Adding an id already present is a no-op,
    /// not an error; `item-added` is announced only for genuinely new ids.
    pub fn add_item(&mut self, id: ProductId) {
        if self.basket.contains(&id) {
            return;
        }
        debug!(%id, "item added to basket");
        self.basket.push(id);
        self.announce(topics::ITEM_ADDED);
    }

    /// Remove an id; announces `item-removed` only when the id was present.
    pub fn remove_item(&mut self, id: &ProductId) {
        let before = self.basket.len();
        self.basket.retain(|item| item != id);
        if self.basket.len() != before {
            debug!(%id, "item removed from basket");
            self.announce(topics::ITEM_REMOVED);
        }
    }

    /// Empty the basket and announce `basket-cleared`.
    pub fn clear_basket(&mut self) {
        self.basket.clear();
        self.announce(topics::BASKET_CLEARED);
    }

    pub fn items(&self) -> &[ProductId] {
        &self.basket
    }

    pub fn item_count(&self) -> usize {
        self.basket.len()
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.basket.contains(id)
    }

    // ------------------------------------------------------------------
    // Totals
    // ------------------------------------------------------------------

    /// Sum of catalog prices over the basket.
    ///
    /// Pure query against the supplied snapshot. Ids missing from the
    /// catalog and priceless products contribute zero; a stale catalog can
    /// never make this fail.
    pub fn calculate_total(&self, catalog: &[Product]) -> u64 {
        self.basket
            .iter()
            .filter_map(|id| catalog.iter().find(|product| &product.id == id))
            .filter_map(|product| product.price)
            .sum()
    }

    /// Basket ids whose catalog price is `None`.
    ///
    /// Query only: the presenter decides to remove them before submission;
    /// flagging must not mutate the basket as a side effect.
    pub fn find_unpriceable(&self, catalog: &[Product]) -> Vec<ProductId> {
        self.basket
            .iter()
            .filter(|id| {
                catalog
                    .iter()
                    .find(|product| product.id == **id)
                    .is_some_and(Product::is_priceless)
            })
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------
    // Order fields / validation state machine
    // ------------------------------------------------------------------

    /// Store a trimmed field value and revalidate **only** its stage.
    ///
    /// Always announces the stage's errors-changed event with the freshly
    /// recomputed mapping; announces the stage's ready event (with current
    /// field values) exactly when the stage crosses from Invalid to Valid.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        self.fields.set(field, value.trim());
        self.revalidate(field.stage());
    }

    fn revalidate(&mut self, stage: FormStage) {
        // Independent per-field checks: every missing field is reported,
        // not just the first one.
        let mut errors = FormErrors::new();
        for field in stage.fields() {
            if self.fields.get(field).is_empty() {
                errors.insert(field, required_message(field).to_string());
            }
        }
        let now_valid = errors.is_empty();

        let (was_valid, errors_topic, ready_topic) = match stage {
            FormStage::Delivery => {
                let was = self.delivery_valid;
                self.delivery_errors = errors.clone();
                self.delivery_valid = now_valid;
                (was, topics::DELIVERY_ERRORS_CHANGED, topics::DELIVERY_READY)
            }
            FormStage::Contact => {
                let was = self.contact_valid;
                self.contact_errors = errors.clone();
                self.contact_valid = now_valid;
                (was, topics::CONTACT_ERRORS_CHANGED, topics::CONTACT_READY)
            }
        };

        self.announce_with(errors_topic, EventPayload::Errors(errors));
        if now_valid && !was_valid {
            self.announce_with(ready_topic, EventPayload::Fields(self.fields.clone()));
        }
    }

    pub fn fields(&self) -> &OrderFields {
        &self.fields
    }

    pub fn errors(&self, stage: FormStage) -> &FormErrors {
        match stage {
            FormStage::Delivery => &self.delivery_errors,
            FormStage::Contact => &self.contact_errors,
        }
    }

    pub fn is_valid(&self, stage: FormStage) -> bool {
        match stage {
            FormStage::Delivery => self.delivery_valid,
            FormStage::Contact => self.contact_valid,
        }
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Assemble the order snapshot handed to the transport gateway.
    ///
    /// Pure read over current in-memory state, so a failed submission can
    /// be retried without re-deriving anything.
    pub fn order_payload(&self, catalog: &[Product]) -> OrderPayload {
        OrderPayload {
            payment: self.fields.payment.clone(),
            address: self.fields.address.clone(),
            phone: self.fields.phone.clone(),
            email: self.fields.email.clone(),
            total: self.calculate_total(catalog),
            items: self.basket.clone(),
        }
    }

    /// Clear all four fields and both error mappings; both stages drop
    /// back to Invalid. The basket is untouched and nothing is announced.
    pub fn reset_order_fields(&mut self) {
        self.fields.clear();
        self.delivery_errors.clear();
        self.contact_errors.clear();
        self.delivery_valid = false;
        self.contact_valid = false;
    }

    /// Post-submission cleanup: the basket and the order fields are
    /// cleared together once the gateway accepts an order.
    pub fn clear_after_submission(&mut self) {
        self.clear_basket();
        self.reset_order_fields();
    }
}
