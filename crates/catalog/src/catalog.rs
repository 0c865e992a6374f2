use std::rc::Rc;

use tracing::{debug, warn};

use stallfront_core::{EventPayload, Product, ProductId, topics};
use stallfront_events::{EventBus, ReactiveModel};

/// Holds the product list and an optional preview selection.
///
/// The catalog is only ever replaced wholesale (never patched), and the
/// preview invariant is: if set, it resolves to an existing catalog entry
/// at the time it was set. Stale ids arriving from views are dropped as
/// no-ops rather than errors — a presenter may race against a catalog
/// refresh.
pub struct CatalogStore {
    bus: Rc<EventBus<EventPayload>>,
    items: Vec<Product>,
    preview: Option<ProductId>,
}

impl ReactiveModel for CatalogStore {
    type Payload = EventPayload;

    fn bus(&self) -> &Rc<EventBus<EventPayload>> {
        &self.bus
    }
}

impl CatalogStore {
    pub fn new(bus: Rc<EventBus<EventPayload>>) -> Self {
        Self {
            bus,
            items: Vec::new(),
            preview: None,
        }
    }

    /// Replace the catalog wholesale and announce `catalog-changed`.
    ///
    /// Subscribers re-read the full catalog; the event carries no diff.
    pub fn set_catalog(&mut self, items: Vec<Product>) {
        debug!(count = items.len(), "catalog replaced");
        self.items = items;
        self.announce(topics::CATALOG_CHANGED);
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Look up a product; `None` for an unknown id, never a panic.
    pub fn item(&self, id: &ProductId) -> Option<&Product> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Move or clear the preview selection.
    ///
    /// `None` clears silently. An id that does not resolve in the current
    /// catalog leaves the preview unchanged and announces nothing; a
    /// resolvable id is stored and `preview-changed` announced.
    pub fn set_preview(&mut self, id: Option<&ProductId>) {
        let Some(id) = id else {
            self.preview = None;
            return;
        };
        if self.item(id).is_none() {
            warn!(%id, "preview rejected: id not in catalog");
            return;
        }
        self.preview = Some(id.clone());
        self.announce(topics::PREVIEW_CHANGED);
    }

    pub fn preview(&self) -> Option<&ProductId> {
        self.preview.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn product(id: &str, price: Option<u64>) -> Product {
        Product {
            id: ProductId::from(id),
            title: format!("Product {id}"),
            description: String::new(),
            image: format!("/{id}.svg"),
            category: "other".to_string(),
            price,
        }
    }

    fn watched_store() -> (CatalogStore, Rc<RefCell<Vec<&'static str>>>) {
        let bus = Rc::new(EventBus::new());
        let log = Rc::new(RefCell::new(Vec::new()));
        for topic in [topics::CATALOG_CHANGED, topics::PREVIEW_CHANGED] {
            let sink = Rc::clone(&log);
            bus.subscribe(topic, move |_: &EventPayload| {
                sink.borrow_mut().push(topic);
            });
        }
        (CatalogStore::new(bus), log)
    }

    #[test]
    fn set_catalog_replaces_wholesale_and_announces() {
        let (mut store, log) = watched_store();

        store.set_catalog(vec![product("a", Some(100)), product("b", None)]);
        assert_eq!(store.items().len(), 2);
        assert_eq!(*log.borrow(), vec![topics::CATALOG_CHANGED]);

        store.set_catalog(vec![product("c", Some(50))]);
        assert_eq!(store.items().len(), 1);
        assert_eq!(
            *log.borrow(),
            vec![topics::CATALOG_CHANGED, topics::CATALOG_CHANGED]
        );
    }

    #[test]
    fn item_lookup_returns_none_for_unknown_ids() {
        let (mut store, _log) = watched_store();
        store.set_catalog(vec![product("a", Some(100))]);

        assert!(store.item(&ProductId::from("a")).is_some());
        assert!(store.item(&ProductId::from("missing")).is_none());
    }

    #[test]
    fn preview_of_known_id_is_stored_and_announced() {
        let (mut store, log) = watched_store();
        store.set_catalog(vec![product("a", Some(100))]);

        store.set_preview(Some(&ProductId::from("a")));
        assert_eq!(store.preview(), Some(&ProductId::from("a")));
        assert_eq!(
            *log.borrow(),
            vec![topics::CATALOG_CHANGED, topics::PREVIEW_CHANGED]
        );
    }

    #[test]
    fn preview_of_unknown_id_is_a_silent_no_op() {
        let (mut store, log) = watched_store();
        store.set_catalog(vec![product("a", Some(100))]);
        store.set_preview(Some(&ProductId::from("a")));
        log.borrow_mut().clear();

        store.set_preview(Some(&ProductId::from("missing")));
        assert_eq!(store.preview(), Some(&ProductId::from("a")));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn clearing_preview_announces_nothing() {
        let (mut store, log) = watched_store();
        store.set_catalog(vec![product("a", Some(100))]);
        store.set_preview(Some(&ProductId::from("a")));
        log.borrow_mut().clear();

        store.set_preview(None);
        assert_eq!(store.preview(), None);
        assert!(log.borrow().is_empty());
    }
}
