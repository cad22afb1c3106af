//! Observable values.
//!
//! A [`Property`] holds a value and calls its listeners synchronously
//! whenever `set` changes it. UI bindings subscribe here instead of polling.

use std::fmt;

/// Handle returned by [`Property::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(&T, &T)>;

/// An observable value.
pub struct Property<T> {
    value: T,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_id: u64,
}

impl<T: Clone + PartialEq> Property<T> {
    /// Create a property holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.value.clone()
    }

    /// Replace the value.
    ///
    /// Listeners are called with `(old, new)` in subscription order, only if
    /// the value changed. Returns whether it changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        let old = std::mem::replace(&mut self.value, value);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&old, &self.value);
        }
        true
    }

    /// Register a change listener.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&T, &T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
