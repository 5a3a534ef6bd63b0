//! Name → mounted-component mapping.
//!
//! The registry never owns components: it keeps the id plus a `Weak`
//! handle, so a component that is dropped without unmounting is simply
//! skipped (and pruned) on the next fan-out.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use super::handle::{ComponentHandle, ComponentId};

struct Entry {
    id: ComponentId,
    handle: Weak<dyn ComponentHandle>,
}

/// Mapping from subscription name to registered handles, in insertion order.
#[derive(Default)]
pub struct ComponentRegistry {
    by_name: RwLock<HashMap<String, Vec<Entry>>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle` under `name`.
    ///
    /// Adding the same component twice under one name keeps a single entry.
    pub fn add(&self, name: &str, handle: &Arc<dyn ComponentHandle>) {
        let id = handle.id();
        let mut by_name = self.by_name.write();
        let entries = by_name.entry(name.to_string()).or_default();
        if entries.iter().any(|e| e.id == id) {
            return;
        }
        entries.push(Entry {
            id,
            handle: Arc::downgrade(handle),
        });
        tracing::trace!(subscription = %name, component = %id, "Registered component");
    }

    /// Deregister `id` from `name`. No-op if it is not registered.
    pub fn remove(&self, name: &str, id: ComponentId) {
        let mut by_name = self.by_name.write();
        let Some(entries) = by_name.get_mut(name) else {
            return;
        };
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() != before {
            tracing::trace!(subscription = %name, component = %id, "Deregistered component");
        }
        if entries.is_empty() {
            by_name.remove(name);
        }
    }

    /// Apply `f` to every live handle under `name`, in registration order.
    ///
    /// The set is snapshotted up front and no lock is held while `f` runs.
    /// Handles removed or dropped after the snapshot are skipped. Returns
    /// the number of handles visited.
    pub fn each<F>(&self, name: &str, mut f: F) -> usize
    where
        F: FnMut(&dyn ComponentHandle),
    {
        let snapshot: Vec<(ComponentId, Weak<dyn ComponentHandle>)> = match self.by_name.read().get(name) {
            Some(entries) => entries.iter().map(|e| (e.id, e.handle.clone())).collect(),
            None => return 0,
        };

        let mut visited = 0;
        let mut dead = Vec::new();
        for (id, weak) in snapshot {
            if !self.contains(name, id) {
                tracing::trace!(subscription = %name, component = %id, "Skipping component removed mid-fan-out");
                continue;
            }
            let Some(handle) = weak.upgrade() else {
                dead.push(id);
                continue;
            };
            f(handle.as_ref());
            visited += 1;
        }

        for id in dead {
            tracing::debug!(subscription = %name, component = %id, "Pruning dropped component");
            self.remove(name, id);
        }
        visited
    }

    pub fn contains(&self, name: &str, id: ComponentId) -> bool {
        self.by_name
            .read()
            .get(name)
            .is_some_and(|entries| entries.iter().any(|e| e.id == id))
    }

    /// Number of handles registered under `name`, including ones whose
    /// component was dropped but not yet pruned.
    pub fn len(&self, name: &str) -> usize {
        self.by_name.read().get(name).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.read().is_empty()
    }

    /// Subscription names that currently have at least one registration.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.by_name.read().keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Props;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Stub {
        id: ComponentId,
        hits: AtomicUsize,
    }

    impl Stub {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                id: ComponentId::next(),
                hits: AtomicUsize::new(0),
            })
        }
    }

    impl ComponentHandle for Stub {
        fn id(&self) -> ComponentId {
            self.id
        }

        fn subscription(&self) -> &str {
            "stub"
        }

        fn refresh(&self) {
            self.hits.fetch_add(1, Ordering::SeqCst);
        }

        fn patch(&self, _props: Props) {}
    }

    fn erase(stub: &Arc<Stub>) -> Arc<dyn ComponentHandle> {
        stub.clone()
    }

    #[test]
    fn each_visits_in_insertion_order() {
        let registry = ComponentRegistry::new();
        let stubs: Vec<_> = (0..3).map(|_| Stub::new()).collect();
        for p in &stubs {
            registry.add("list", &erase(p));
        }

        let mut seen = Vec::new();
        registry.each("list", |h| seen.push(h.id()));
        assert_eq!(seen, stubs.iter().map(|p| p.id).collect::<Vec<_>>());
    }

    #[test]
    fn duplicate_add_keeps_one_entry() {
        let registry = ComponentRegistry::new();
        let stub = Stub::new();
        registry.add("a", &erase(&stub));
        registry.add("a", &erase(&stub));
        assert_eq!(registry.len("a"), 1);
    }

    #[test]
    fn remove_prunes_empty_names() {
        let registry = ComponentRegistry::new();
        let stub = Stub::new();
        registry.add("a", &erase(&stub));
        registry.remove("a", stub.id);

        assert!(registry.is_empty());
        assert!(registry.names().is_empty());
    }

    #[test]
    fn dropped_components_are_skipped_and_pruned() {
        let registry = ComponentRegistry::new();
        let kept = Stub::new();
        let dropped = Stub::new();
        registry.add("a", &erase(&kept));
        registry.add("a", &erase(&dropped));
        drop(dropped);

        let visited = registry.each("a", |h| h.refresh());

        assert_eq!(visited, 1);
        assert_eq!(kept.hits.load(Ordering::SeqCst), 1);
        assert_eq!(registry.len("a"), 1);
    }

    #[test]
    fn unknown_name_visits_nothing() {
        let registry = ComponentRegistry::new();
        assert_eq!(registry.each("missing", |_| panic!("must not be called")), 0);
    }
}
