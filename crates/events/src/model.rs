//! Base trait for bus-announcing state holders.

use std::rc::Rc;

use crate::bus::EventBus;

/// A state holder bound to one shared [`EventBus`].
///
/// Gives every store a uniform "announce a change" primitive so its
/// internal field layout stays decoupled from what it broadcasts. Pure
/// delegation to [`EventBus::emit`]; no validation or transformation
/// happens here.
pub trait ReactiveModel {
    type Payload: Default;

    fn bus(&self) -> &Rc<EventBus<Self::Payload>>;

    /// Announce a change that carries no data of its own.
    fn announce(&self, topic: &str) {
        self.bus().emit(topic, Self::Payload::default());
    }

    /// Announce a change, forwarding `payload` verbatim.
    fn announce_with(&self, topic: &str, payload: Self::Payload) {
        self.bus().emit(topic, payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Counter {
        bus: Rc<EventBus<u32>>,
        value: u32,
    }

    impl Counter {
        fn bump(&mut self) {
            self.value += 1;
            self.announce_with("counter-changed", self.value);
        }
    }

    impl ReactiveModel for Counter {
        type Payload = u32;

        fn bus(&self) -> &Rc<EventBus<u32>> {
            &self.bus
        }
    }

    #[test]
    fn announce_with_forwards_verbatim() {
        let bus = Rc::new(EventBus::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        bus.subscribe("counter-changed", move |value: &u32| {
            sink.borrow_mut().push(*value);
        });

        let mut counter = Counter { bus, value: 0 };
        counter.bump();
        counter.bump();

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn announce_substitutes_the_default_payload() {
        let bus = Rc::new(EventBus::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        bus.subscribe("counter-changed", move |value: &u32| {
            sink.borrow_mut().push(*value);
        });

        let counter = Counter { bus, value: 7 };
        counter.announce("counter-changed");

        assert_eq!(*seen.borrow(), vec![0]);
    }
}
