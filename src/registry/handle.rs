//! Handles to mounted component instances.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::selector::Props;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a component instance.
///
/// Registry membership is tested by this id, never by value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    /// Allocate a fresh id. Ids are never reused.
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A mounted component that can be told to refresh.
pub trait ComponentHandle: Send + Sync {
    fn id(&self) -> ComponentId;

    /// Subscription name the component is registered under.
    fn subscription(&self) -> &str;

    /// Recompute injected props and re-render.
    fn refresh(&self);

    /// Re-render with `props` layered over the last rendered props,
    /// without running the selector.
    fn patch(&self, props: Props);
}
