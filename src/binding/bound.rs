//! Binding builder and bound component factory.

use std::sync::Arc;

use serde_json::Value;

use super::component::Presentational;
use super::instance::Instance;
use super::meta::ComponentMeta;
use crate::connector::Connector;
use crate::mvi::Action;
use crate::selector::{Props, Selector};

/// Pending binding: a subscription name (or none yet), an optional inline
/// selector and extra selector arguments.
pub struct Binding<S, A, X> {
    connector: Connector<S, A, X>,
    name: Option<String>,
    selector: Option<Selector<S, X>>,
    extra_args: Vec<Value>,
}

impl<S, A, X> Binding<S, A, X>
where
    S: Send + Sync + 'static,
    A: Action,
    X: Send + Sync + 'static,
{
    pub(crate) fn new(
        connector: Connector<S, A, X>,
        name: Option<String>,
        selector: Option<Selector<S, X>>,
    ) -> Self {
        Self {
            connector,
            name,
            selector,
            extra_args: Vec::new(),
        }
    }

    /// Override the subscription name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append one extra selector argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.extra_args.push(value.into());
        self
    }

    pub fn args<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.extra_args.extend(values.into_iter().map(Into::into));
        self
    }

    /// Wrap a presentational component.
    ///
    /// Without an explicit name the component's declared name becomes the
    /// subscription key, fixed here rather than per instance.
    pub fn wrap<C: Presentational>(self, component: C) -> BoundComponent<C, S, A, X> {
        let subscription = self.name.unwrap_or_else(|| component.name().to_string());
        BoundComponent {
            component: Arc::new(component),
            connector: self.connector,
            subscription: Arc::from(subscription),
            selector: self.selector,
            extra_args: Arc::from(self.extra_args),
        }
    }
}

/// A presentational component bound to a subscription. Cheap to clone;
/// every clone instantiates the same component.
pub struct BoundComponent<C, S, A, X> {
    component: Arc<C>,
    connector: Connector<S, A, X>,
    subscription: Arc<str>,
    selector: Option<Selector<S, X>>,
    extra_args: Arc<[Value]>,
}

impl<C, S, A, X> Clone for BoundComponent<C, S, A, X> {
    fn clone(&self) -> Self {
        Self {
            component: Arc::clone(&self.component),
            connector: self.connector.clone(),
            subscription: Arc::clone(&self.subscription),
            selector: self.selector.clone(),
            extra_args: Arc::clone(&self.extra_args),
        }
    }
}

impl<C, S, A, X> BoundComponent<C, S, A, X> {
    pub fn subscription(&self) -> &str {
        &self.subscription
    }

    pub fn inner(&self) -> &C {
        &self.component
    }

    pub fn connector(&self) -> &Connector<S, A, X> {
        &self.connector
    }

    pub fn extra_args(&self) -> &[Value] {
        &self.extra_args
    }
}

impl<C, S, A, X> BoundComponent<C, S, A, X>
where
    C: Presentational,
    S: Send + Sync + 'static,
    A: Action,
    X: Send + Sync + 'static,
{
    pub fn display_name(&self) -> String {
        format!("Bound({})", self.component.name())
    }

    /// The wrapped component's metadata. The binding adds none of its own.
    pub fn meta(&self) -> Option<&ComponentMeta> {
        self.component.meta()
    }

    /// Create an unmounted instance with the props its parent passed.
    pub fn instantiate(&self, own_props: Props) -> Arc<Instance<C, S, A, X>> {
        Instance::new(self.clone(), own_props)
    }

    /// Injected props for `own_props` against the current state.
    pub(crate) fn select(&self, own_props: &Props) -> Props {
        match &self.selector {
            Some(selector) => self.connector.select_with(selector, own_props, &self.extra_args),
            None => self.connector.select(&self.subscription, own_props, &self.extra_args),
        }
    }
}
