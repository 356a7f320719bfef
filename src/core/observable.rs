//! Current value plus change subscription
//!
//! State holders in the core expose their values through [`Observable`] so a
//! presentation layer can mirror them into its own reactive primitives
//! without the core depending on a UI framework.

use std::sync::{Arc, Mutex};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Shared<T> {
    value: T,
    listeners: Vec<(u64, Listener<T>)>,
    next_id: u64,
}

/// Shared value that notifies subscribers when it changes
pub struct Observable<T> {
    shared: Arc<Mutex<Shared<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

/// Handle returned by [`Observable::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

impl<T: Clone + PartialEq + Send + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                value,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        match self.shared.lock() {
            Ok(shared) => shared.value.clone(),
            Err(poisoned) => poisoned.into_inner().value.clone(),
        }
    }

    /// Replace the value. Subscribers are notified only on an actual change.
    ///
    /// Returns whether the value changed.
    pub fn set(&self, value: T) -> bool {
        let listeners = {
            let mut shared = match self.shared.lock() {
                Ok(shared) => shared,
                Err(poisoned) => poisoned.into_inner(),
            };
            if shared.value == value {
                return false;
            }
            shared.value = value.clone();
            shared
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect::<Vec<_>>()
        };

        // Listeners run outside the lock so they may read the value back
        for listener in listeners {
            listener(&value);
        }
        true
    }

    /// Register a change listener
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let mut shared = match self.shared.lock() {
            Ok(shared) => shared,
            Err(poisoned) => poisoned.into_inner(),
        };
        let id = shared.next_id;
        shared.next_id += 1;
        shared.listeners.push((id, Arc::new(listener)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        if let Ok(mut shared) = self.shared.lock() {
            shared.listeners.retain(|(listener_id, _)| *listener_id != id.0);
        }
    }
}
