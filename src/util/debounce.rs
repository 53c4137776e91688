//! Trailing-edge debounce for browser callbacks.
//!
//! DESIGN
//! ======
//! Each `call` stores its argument and bumps a generation counter before
//! scheduling a `gloo-timers` timeout. A timeout only fires the callback if
//! its generation is still current, so every call effectively resets the
//! timer and only the last argument survives. Timeouts are never cancelled;
//! superseded ones wake up and do nothing.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::{Arc, Mutex, PoisonError};

struct Slot<T> {
    generation: u64,
    pending: Option<T>,
}

/// A fire-and-forget debounced wrapper around `callback`.
pub struct Debouncer<T> {
    wait_ms: u32,
    slot: Arc<Mutex<Slot<T>>>,
    callback: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self { wait_ms: self.wait_ms, slot: Arc::clone(&self.slot), callback: Arc::clone(&self.callback) }
    }
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(wait_ms: u32, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            wait_ms,
            slot: Arc::new(Mutex::new(Slot { generation: 0, pending: None })),
            callback: Arc::new(callback),
        }
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Schedule `callback(value)` after the quiet period, replacing any
    /// pending value. Outside the browser nothing is scheduled; use `flush`.
    pub fn call(&self, value: T) {
        let generation = self.arm(value);
        #[cfg(feature = "hydrate")]
        {
            let this = self.clone();
            gloo_timers::callback::Timeout::new(self.wait_ms, move || this.fire(generation)).forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = generation;
        }
    }

    /// Invoke the callback now with the pending value, if any.
    pub fn flush(&self) {
        let value = {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            slot.generation += 1;
            slot.pending.take()
        };
        if let Some(value) = value {
            (self.callback)(value);
        }
    }

    /// Drop the pending value without invoking the callback.
    pub fn cancel(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.generation += 1;
        slot.pending = None;
    }

    fn arm(&self, value: T) -> u64 {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.generation += 1;
        slot.pending = Some(value);
        slot.generation
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn fire(&self, generation: u64) {
        let value = {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            if slot.generation != generation {
                return;
            }
            slot.pending.take()
        };
        if let Some(value) = value {
            (self.callback)(value);
        }
    }
}
