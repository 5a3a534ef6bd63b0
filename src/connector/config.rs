//! One-time wiring options for a [`Connector`](super::Connector).

use std::sync::Arc;

use serde_json::Value;

use crate::binding::UpdatePolicy;
use crate::config::Settings;
use crate::matcher::{MatchResult, Matcher, RouteTable, Transition};
use crate::selector::{Props, SelectorMap};

/// Custom source of the current state, replacing the internal holder for
/// selector reads.
pub type GetState<S> = Arc<dyn Fn() -> Arc<S> + Send + Sync>;

/// Recognized configuration options.
///
/// Selectors and routes are merged into the connector's existing ones;
/// every other option replaces the current value only when set.
pub struct ConnectorConfig<S, A, X = ()> {
    pub(super) get_state: Option<GetState<S>>,
    pub(super) actions: Option<X>,
    pub(super) selectors: SelectorMap<S, X>,
    pub(super) routes: Option<RouteTable>,
    pub(super) matcher: Option<Matcher<S, A>>,
    pub(super) policy: Option<UpdatePolicy>,
}

impl<S, A, X> ConnectorConfig<S, A, X> {
    pub fn new() -> Self {
        Self {
            get_state: None,
            actions: None,
            selectors: SelectorMap::new(),
            routes: None,
            matcher: None,
            policy: None,
        }
    }

    pub fn get_state<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Arc<S> + Send + Sync + 'static,
    {
        self.get_state = Some(Arc::new(f));
        self
    }

    /// Opaque object handed to every selector.
    pub fn actions(mut self, actions: X) -> Self {
        self.actions = Some(actions);
        self
    }

    /// Add every selector in `selectors`, keeping ones added earlier.
    pub fn selectors(mut self, selectors: SelectorMap<S, X>) -> Self {
        self.selectors.extend(selectors);
        self
    }

    pub fn selector<F>(mut self, name: impl Into<String>, selector: F) -> Self
    where
        F: Fn(&S, &X, &Props, &[Value]) -> Props + Send + Sync + 'static,
    {
        self.selectors = self.selectors.with(name, selector);
        self
    }

    pub fn matcher<F>(mut self, matcher: F) -> Self
    where
        F: Fn(&Transition<'_, S, A>) -> MatchResult + Send + Sync + 'static,
    {
        self.matcher = Some(Arc::new(matcher));
        self
    }

    pub fn policy(mut self, policy: UpdatePolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Declare action-name routes. Repeated calls merge, and a later
    /// declaration of the same action overrides the earlier one.
    pub fn routes(mut self, routes: RouteTable) -> Self {
        self.routes.get_or_insert_with(RouteTable::new).extend(routes);
        self
    }

    /// Seed a config from loaded settings: the render policy, plus the
    /// declared routes if there are any.
    pub fn from_settings(settings: &Settings) -> Self {
        let config = Self::new().policy(settings.render.policy);
        if settings.routes.is_empty() {
            config
        } else {
            config.routes(settings.routes.clone())
        }
    }
}

impl<S, A, X> Default for ConnectorConfig<S, A, X> {
    fn default() -> Self {
        Self::new()
    }
}
