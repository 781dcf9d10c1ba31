use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

type Listener<T> = Box<dyn FnMut(&T) + Send>;

struct PropertyInner<T> {
    value: T,
    next_listener_id: u64,
    listeners: HashMap<u64, Listener<T>>,
}

/// Observable value with push notification on change. Listeners run
/// synchronously in the caller's context of `set()`, so a listener must not
/// call back into the property it is registered on.
pub struct StateProperty<T> {
    inner: Arc<Mutex<PropertyInner<T>>>,
}

impl<T> Clone for StateProperty<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + Send + 'static> StateProperty<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PropertyInner {
                value,
                next_listener_id: 0,
                listeners: HashMap::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.lock().unwrap().value.clone()
    }

    pub fn set(&self, value: T) {
        let mut inner = self.inner.lock().unwrap();
        inner.value = value;
        let value = inner.value.clone();
        for listener in inner.listeners.values_mut() {
            listener(&value);
        }
    }

    /// Registers a change listener and invokes it immediately with the
    /// current value. The returned handle removes the listener on `cancel`
    /// or on drop; removal is immediate and synchronous.
    pub fn subscribe(&self, mut listener: impl FnMut(&T) + Send + 'static) -> Subscription {
        let mut inner = self.inner.lock().unwrap();
        let listener_id = inner.next_listener_id;
        inner.next_listener_id += 1;

        listener(&inner.value);
        inner.listeners.insert(listener_id, Box::new(listener));

        let weak_inner = Arc::downgrade(&self.inner);
        Subscription {
            cancel_fn: Some(Box::new(move || {
                if let Some(inner) = weak_inner.upgrade() {
                    inner.lock().unwrap().listeners.remove(&listener_id);
                }
            })),
        }
    }
}

pub struct Subscription {
    cancel_fn: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel_fn) = self.cancel_fn.take() {
            cancel_fn();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}
