//! Registry of named selectors.
//!
//! Selectors are registered at configuration time and never removed.
//! Looking up a name that was never registered is not an error: the
//! component simply receives no injected props.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use super::props::Props;

/// A pure function deriving a partial prop set from state.
///
/// Arguments are the current state, the configured actions object, the
/// component's own props and the extra arguments given at bind time.
pub type Selector<S, X> = Arc<dyn Fn(&S, &X, &Props, &[Value]) -> Props + Send + Sync>;

/// Named selectors collected before being merged into a registry.
pub struct SelectorMap<S, X> {
    entries: Vec<(String, Selector<S, X>)>,
}

impl<S, X> SelectorMap<S, X> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a selector under `name`.
    pub fn with<F>(mut self, name: impl Into<String>, selector: F) -> Self
    where
        F: Fn(&S, &X, &Props, &[Value]) -> Props + Send + Sync + 'static,
    {
        self.entries.push((name.into(), Arc::new(selector)));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S, X> Default for SelectorMap<S, X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, X> Extend<(String, Selector<S, X>)> for SelectorMap<S, X> {
    fn extend<I: IntoIterator<Item = (String, Selector<S, X>)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<S, X> IntoIterator for SelectorMap<S, X> {
    type Item = (String, Selector<S, X>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Mapping from selector name to selector function.
pub struct SelectorRegistry<S, X> {
    selectors: RwLock<HashMap<String, Selector<S, X>>>,
}

impl<S, X> SelectorRegistry<S, X> {
    pub fn new() -> Self {
        Self {
            selectors: RwLock::new(HashMap::new()),
        }
    }

    /// Merge named selectors into the registry.
    ///
    /// A later registration under an existing name replaces it.
    pub fn register(&self, map: SelectorMap<S, X>) {
        self.register_entries(map.into_iter().map(|(name, f)| (name, Some(f))));
    }

    /// Merge entries from a partially filled mapping.
    ///
    /// Entries without a selector are skipped silently.
    pub fn register_entries<I, K>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, Option<Selector<S, X>>)>,
        K: Into<String>,
    {
        let mut selectors = self.selectors.write();
        for (name, selector) in entries {
            let name = name.into();
            match selector {
                Some(selector) => {
                    tracing::trace!(selector = %name, "Registered selector");
                    selectors.insert(name, selector);
                }
                None => {
                    tracing::trace!(selector = %name, "Skipped empty selector entry");
                }
            }
        }
    }

    /// Look up a selector by name.
    pub fn resolve(&self, name: &str) -> Option<Selector<S, X>> {
        self.selectors.read().get(name).cloned()
    }

    /// Run the selector registered under `name`.
    ///
    /// Returns empty props when nothing is registered. The registry lock is
    /// released before the selector runs, so selectors may call back into
    /// the registry.
    pub fn invoke(&self, name: &str, state: &S, actions: &X, props: &Props, extra: &[Value]) -> Props {
        match self.resolve(name) {
            Some(selector) => selector(state, actions, props, extra),
            None => {
                tracing::trace!(selector = %name, "No selector registered, injecting nothing");
                Props::new()
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.selectors.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.selectors.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.read().is_empty()
    }
}

impl<S, X> Default for SelectorRegistry<S, X> {
    fn default() -> Self {
        Self::new()
    }
}
