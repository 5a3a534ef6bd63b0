//! The connector: one explicit context object owning the state holder,
//! both registries and the matcher.
//!
//! ```text
//! dispatch ──→ WrappedReducer ──→ StateHolder::set ──→ Matcher
//!                                                        │
//!       render ←── selector ←── Instance::refresh ←── ComponentRegistry
//! ```
//!
//! A whole dispatch runs synchronously. No internal lock is held while
//! user code (reducers, selectors, matchers, callbacks, renders) runs.
//! Concurrent dispatches must be serialized by the caller.

mod config;
mod interceptor;

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

pub use config::{ConnectorConfig, GetState};
pub use interceptor::WrappedReducer;

use crate::binding::{Binding, UpdatePolicy};
use crate::matcher::{MatchResult, Matcher, RouteTable, Transition};
use crate::mvi::{Action, Reducer, UiState};
use crate::registry::ComponentRegistry;
use crate::selector::{Props, Selector, SelectorRegistry};
use crate::store::StateHolder;

/// Shared handle to a connector instance. Clones share the same state.
pub struct Connector<S, A, X = ()> {
    inner: Arc<Inner<S, A, X>>,
}

struct Inner<S, A, X> {
    holder: StateHolder<S>,
    get_state: RwLock<Option<GetState<S>>>,
    actions: RwLock<Arc<X>>,
    selectors: SelectorRegistry<S, X>,
    components: ComponentRegistry,
    routes: RwLock<RouteTable>,
    matcher: RwLock<Option<Matcher<S, A>>>,
    policy: RwLock<UpdatePolicy>,
}

impl<S, A, X> Clone for Connector<S, A, X> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A, X> Connector<S, A, X> {
    /// Current state, read through the configured state source.
    pub fn state(&self) -> Arc<S> {
        let source = self.inner.get_state.read().clone();
        match source {
            Some(get_state) => get_state(),
            None => self.inner.holder.get(),
        }
    }

    pub fn holder(&self) -> &StateHolder<S> {
        &self.inner.holder
    }

    pub fn selectors(&self) -> &SelectorRegistry<S, X> {
        &self.inner.selectors
    }

    pub fn components(&self) -> &ComponentRegistry {
        &self.inner.components
    }

    pub fn actions(&self) -> Arc<X> {
        Arc::clone(&self.inner.actions.read())
    }

    pub fn policy(&self) -> UpdatePolicy {
        *self.inner.policy.read()
    }

    /// Snapshot of every route declared so far.
    pub fn routes(&self) -> RouteTable {
        self.inner.routes.read().clone()
    }
}

impl<S, A> Connector<S, A, ()>
where
    S: Send + Sync + 'static,
    A: Action,
{
    /// Create a connector with no actions object.
    pub fn new(initial: S) -> Self {
        Self::with_actions(initial, ())
    }
}

impl<S, A, X> Connector<S, A, X>
where
    S: Send + Sync + 'static,
    A: Action,
    X: Send + Sync + 'static,
{
    pub fn with_actions(initial: S, actions: X) -> Self {
        Self {
            inner: Arc::new(Inner {
                holder: StateHolder::new(initial),
                get_state: RwLock::new(None),
                actions: RwLock::new(Arc::new(actions)),
                selectors: SelectorRegistry::new(),
                components: ComponentRegistry::new(),
                routes: RwLock::new(RouteTable::new()),
                matcher: RwLock::new(None),
                policy: RwLock::new(UpdatePolicy::default()),
            }),
        }
    }

    /// Apply configuration options.
    ///
    /// Selectors and routes accumulate across calls. A route re-declared for
    /// the same action replaces the earlier targets.
    pub fn configure(&self, config: ConnectorConfig<S, A, X>) {
        let ConnectorConfig {
            get_state,
            actions,
            selectors,
            routes,
            matcher,
            policy,
        } = config;

        if !selectors.is_empty() {
            tracing::debug!(count = selectors.len(), "Registering selectors");
        }
        self.inner.selectors.register(selectors);
        if let Some(get_state) = get_state {
            *self.inner.get_state.write() = Some(get_state);
        }
        if let Some(actions) = actions {
            *self.inner.actions.write() = Arc::new(actions);
        }
        if let Some(routes) = routes {
            let mut table = self.inner.routes.write();
            table.extend(routes);
            tracing::debug!(routes = ?*table, "Routes merged");
        }
        if let Some(matcher) = matcher {
            *self.inner.matcher.write() = Some(matcher);
        }
        if let Some(policy) = policy {
            tracing::debug!(?policy, "Update policy set");
            *self.inner.policy.write() = policy;
        }
    }

    /// Run the selector registered under `name` against the current state.
    /// Empty props when nothing is registered.
    pub fn select(&self, name: &str, props: &Props, extra: &[Value]) -> Props {
        let state = self.state();
        let actions = self.actions();
        self.inner.selectors.invoke(name, &state, &actions, props, extra)
    }

    /// Run an inline selector against the current state.
    pub fn select_with(&self, selector: &Selector<S, X>, props: &Props, extra: &[Value]) -> Props {
        let state = self.state();
        let actions = self.actions();
        selector(&state, &actions, props, extra)
    }

    /// Wrap `reducer` so every transition it computes is published and
    /// matched.
    pub fn wrap_reducer<R>(&self, reducer: R) -> WrappedReducer<R, S, A, X>
    where
        R: Reducer<S, A>,
        S: UiState,
    {
        WrappedReducer::new(reducer, self.clone())
    }

    /// Replace the state without a reducer, then match and fan out.
    /// Returns the number of components refreshed or called back.
    pub fn publish(&self, next: S, action: &A) -> usize {
        let next = Arc::new(next);
        let previous = self.inner.holder.replace(Arc::clone(&next));
        self.classify(&previous, &next, action)
    }

    pub(crate) fn commit(&self, previous: &S, next: S, action: &A) -> usize {
        let next = Arc::new(next);
        self.inner.holder.replace(Arc::clone(&next));
        self.classify(previous, &next, action)
    }

    /// The configured matcher decides first; when it is absent or does not
    /// match, the action name is looked up in the route table.
    fn classify(&self, previous: &S, next: &S, action: &A) -> usize {
        let matcher = self.inner.matcher.read().clone();
        let matched = matcher.map(|matcher| {
            matcher(&Transition {
                state: previous,
                next_state: next,
                action,
            })
        });
        let result = match matched {
            Some(result) if result.is_match() => result,
            _ => {
                let name = action.name();
                self.inner.routes.read().classify(name)
            }
        };
        if !result.is_match() {
            tracing::trace!(action = action.name(), "No match, state replaced only");
            return 0;
        }

        let touched = self.invalidate(&result);
        tracing::debug!(
            action = action.name(),
            targets = ?result.targets(),
            touched,
            "Transition published"
        );
        touched
    }

    /// Fan a match result out to the registered components.
    ///
    /// Returns the number of components refreshed or called back.
    pub fn invalidate(&self, result: &MatchResult) -> usize {
        let components = &self.inner.components;
        match result {
            MatchResult::Refresh(names) => names
                .iter()
                .map(|name| components.each(name, |handle| handle.refresh()))
                .sum(),
            MatchResult::Callback { names, callback } => names
                .iter()
                .map(|name| components.each(name, |handle| callback(handle)))
                .sum(),
            MatchResult::NoMatch => 0,
        }
    }

    /// Bind components under an explicit subscription name.
    pub fn bind(&self, name: impl Into<String>) -> Binding<S, A, X> {
        Binding::new(self.clone(), Some(name.into()), None)
    }

    /// Bind components under their own declared name.
    pub fn bind_default(&self) -> Binding<S, A, X> {
        Binding::new(self.clone(), None, None)
    }

    /// Bind components with an inline selector, subscribed under their own
    /// declared name unless [`Binding::named`] overrides it.
    pub fn bind_selector<F>(&self, selector: F) -> Binding<S, A, X>
    where
        F: Fn(&S, &X, &Props, &[Value]) -> Props + Send + Sync + 'static,
    {
        Binding::new(self.clone(), None, Some(Arc::new(selector)))
    }
}
