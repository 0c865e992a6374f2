//! Event routing (mechanics only).
//!
//! The bus routes **named** events: a subscription is keyed either by an
//! exact event name or by a regular expression tested against emitted
//! names. Both kinds share one registration order, and dispatch always
//! follows that order — a pattern subscription registered before an exact
//! one fires first.
//!
//! ## Dispatch & re-entrancy
//!
//! Dispatch is synchronous: every matching handler runs to completion
//! before `emit` returns. Handlers may themselves call `emit` (nested
//! dispatch also completes before the triggering handler resumes) and may
//! subscribe or unsubscribe. The handler set for a dispatch is snapshotted
//! at the moment `emit` is called, so registrations made during a dispatch
//! never join that dispatch — that is what keeps subscribe-during-dispatch
//! from recursing forever. The bus does **not** detect emit cycles; store
//! logic has to avoid them.
//!
//! ## Threading
//!
//! Everything here is single-owner, single-threaded (`Rc` + `RefCell`).
//! There is no lock discipline because nothing runs concurrently.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use regex::Regex;
use thiserror::Error;
use tracing::trace;

use crate::overlay::Overlay;

/// Handle returned by `subscribe*`; also the global registration index.
///
/// Ids are handed out monotonically, so ordering subscriptions by id is
/// the same as ordering them by registration time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Debug, Error)]
pub enum BusError {
    /// The subscription pattern failed to compile. Surfaced at subscribe
    /// time, never at emit time.
    #[error("invalid subscription pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

type Handler<M> = Rc<dyn Fn(&M)>;

struct ExactEntry<M> {
    id: SubscriptionId,
    handler: Handler<M>,
}

struct PatternEntry<M> {
    id: SubscriptionId,
    pattern: Regex,
    handler: Handler<M>,
}

/// Exact-name lookup plus an ordered pattern list; matches from both are
/// merged by registration id on emit.
struct Registry<M> {
    next_id: u64,
    exact: HashMap<String, Vec<ExactEntry<M>>>,
    patterns: Vec<PatternEntry<M>>,
}

impl<M> Registry<M> {
    fn fresh_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// In-process publish/subscribe router.
///
/// One instance is created at startup and handed (as `Rc`) to every store
/// and collaborator that publishes or subscribes — there is no ambient
/// global bus.
pub struct EventBus<M> {
    registry: RefCell<Registry<M>>,
}

impl<M> EventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to one exact event name.
    ///
    /// Duplicate keys are fine; every matching handler fires on emit.
    pub fn subscribe(
        &self,
        topic: impl Into<String>,
        handler: impl Fn(&M) + 'static,
    ) -> SubscriptionId {
        let mut registry = self.registry.borrow_mut();
        let id = registry.fresh_id();
        registry.exact.entry(topic.into()).or_default().push(ExactEntry {
            id,
            handler: Rc::new(handler),
        });
        id
    }

    /// Subscribe a handler to every event whose name matches `pattern`.
    ///
    /// A malformed pattern is a caller error and fails here, not at the
    /// first matching emit.
    pub fn subscribe_pattern(
        &self,
        pattern: &str,
        handler: impl Fn(&M) + 'static,
    ) -> Result<SubscriptionId, BusError> {
        let pattern = Regex::new(pattern)?;
        let mut registry = self.registry.borrow_mut();
        let id = registry.fresh_id();
        registry.patterns.push(PatternEntry {
            id,
            pattern,
            handler: Rc::new(handler),
        });
        Ok(id)
    }

    /// Remove exactly the registration behind `id`. Idempotent.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut registry = self.registry.borrow_mut();
        for entries in registry.exact.values_mut() {
            entries.retain(|entry| entry.id != id);
        }
        registry.exact.retain(|_, entries| !entries.is_empty());
        registry.patterns.retain(|entry| entry.id != id);
    }

    /// Dispatch `payload` to every subscription matching `topic`, in
    /// registration order. No subscribers is a silent no-op.
    pub fn emit(&self, topic: &str, payload: M) {
        // Snapshot before running anything: the registry borrow must be
        // released so handlers can subscribe/unsubscribe/emit re-entrantly.
        let mut matched: Vec<(SubscriptionId, Handler<M>)> = {
            let registry = self.registry.borrow();
            let exact = registry
                .exact
                .get(topic)
                .into_iter()
                .flatten()
                .map(|entry| (entry.id, Rc::clone(&entry.handler)));
            let patterns = registry
                .patterns
                .iter()
                .filter(|entry| entry.pattern.is_match(topic))
                .map(|entry| (entry.id, Rc::clone(&entry.handler)));
            exact.chain(patterns).collect()
        };
        matched.sort_by_key(|(id, _)| *id);

        trace!(topic, handlers = matched.len(), "dispatching event");
        for (_, handler) in matched {
            handler(&payload);
        }
    }
}

impl<M> Default for EventBus<M> {
    fn default() -> Self {
        Self {
            registry: RefCell::new(Registry {
                next_id: 0,
                exact: HashMap::new(),
                patterns: Vec::new(),
            }),
        }
    }
}

impl<M> EventBus<M>
where
    M: Clone + Overlay + 'static,
{
    /// Build a reusable emitter for `topic`.
    ///
    /// The returned callback overlays whatever payload it is handed onto
    /// `base` and emits the result; invoked with `None` it emits `base`
    /// as-is. This lets callback sites (UI widgets, presenters) be wired
    /// without writing a closure per site.
    pub fn bind(self: &Rc<Self>, topic: &str, base: M) -> impl Fn(Option<M>) + use<M> {
        let bus = Rc::clone(self);
        let topic = topic.to_string();
        move |patch: Option<M>| {
            let payload = match patch {
                Some(patch) => base.clone().overlay(patch),
                None => base.clone(),
            };
            bus.emit(&topic, payload);
        }
    }
}
