//! Synchronous typed publish/subscribe events.
//!
//! [`Event`] is a minimal observer registry: callbacks subscribe and are
//! invoked in subscription order every time the event fires, on the firing
//! thread, before `fire` returns. Subscribing hands back a [`SubscriberId`]
//! so observers can be detached again.
//!
//! There is no delivery guarantee across re-subscription and no persistence
//! of missed events.

use std::fmt;

/// Handle identifying one subscription on an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// A synchronous, single-threaded event with typed payloads.
pub struct Event<T> {
    subscribers: Vec<(SubscriberId, Box<dyn FnMut(&T)>)>,
    next_id: u64,
}

impl<T> Event<T> {
    /// Create a new event with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a callback, returning a handle for unsubscription.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns `false` if the handle was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Invoke every current subscriber once, in subscription order.
    pub fn fire(&mut self, payload: &T) {
        for (_, callback) in &mut self.subscribers {
            callback(payload);
        }
    }

    /// Get the number of subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T> Default for Event<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_fire_invokes_subscribers_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut event = Event::new();

        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            event.subscribe(move |payload: &i32| seen.borrow_mut().push((tag, *payload)));
        }
        event.fire(&7);

        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_each_subscriber_runs_once_per_fire() {
        let count = Rc::new(RefCell::new(0));
        let mut event = Event::new();

        let counter = Rc::clone(&count);
        event.subscribe(move |_: &()| *counter.borrow_mut() += 1);

        event.fire(&());
        event.fire(&());
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_unsubscribed_callback_is_not_invoked() {
        let count = Rc::new(RefCell::new(0));
        let mut event = Event::new();

        let counter = Rc::clone(&count);
        let id = event.subscribe(move |_: &()| *counter.borrow_mut() += 1);

        event.fire(&());
        assert!(event.unsubscribe(id));
        event.fire(&());

        assert_eq!(*count.borrow(), 1);
        assert!(!event.unsubscribe(id));
    }

    #[test]
    fn test_fire_with_no_subscribers_is_a_no_op() {
        let mut event: Event<u32> = Event::new();
        event.fire(&1);
        assert_eq!(event.subscriber_count(), 0);
    }
}
