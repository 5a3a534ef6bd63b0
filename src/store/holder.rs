//! Thread-safe holder for the current state snapshot.
//!
//! The holder only swaps pointers: readers get an `Arc` snapshot and
//! never observe a partially written value.

use std::sync::Arc;

use parking_lot::RwLock;

/// Single mutable reference to the current state.
///
/// The state is replaced wholesale on every transition. The lock guards
/// only the pointer swap and is never held while user code runs.
pub struct StateHolder<S> {
    current: RwLock<Arc<S>>,
}

impl<S> StateHolder<S> {
    /// Create a holder seeded with the initial state.
    pub fn new(initial: S) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// Get a snapshot of the most recently set state.
    pub fn get(&self) -> Arc<S> {
        Arc::clone(&self.current.read())
    }

    /// Replace the current state.
    pub fn set(&self, next: S) {
        self.replace(Arc::new(next));
    }

    /// Replace the current state and return the previous snapshot.
    pub fn replace(&self, next: Arc<S>) -> Arc<S> {
        std::mem::replace(&mut *self.current.write(), next)
    }
}

impl<S: Default> Default for StateHolder<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for StateHolder<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateHolder")
            .field("current", &*self.current.read())
            .finish()
    }
}
