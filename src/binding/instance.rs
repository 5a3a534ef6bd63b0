//! Mounted component instances.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use super::bound::BoundComponent;
use super::component::Presentational;
use crate::mvi::Action;
use crate::registry::{ComponentHandle, ComponentId};
use crate::selector::Props;

/// Lifecycle phase of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unmounted,
    Mounted,
}

struct Lifecycle {
    phase: Phase,
    own_props: Props,
    rendered: Option<Props>,
    renders: u64,
}

/// One instance of a bound component.
///
/// The host drives it through `mount`, `receive_props` and `unmount`;
/// the connector drives it through [`ComponentHandle::refresh`] and
/// [`ComponentHandle::patch`].
pub struct Instance<C, S, A, X> {
    id: ComponentId,
    bound: BoundComponent<C, S, A, X>,
    this: Weak<Self>,
    lifecycle: Mutex<Lifecycle>,
}

impl<C, S, A, X> Instance<C, S, A, X>
where
    C: Presentational,
    S: Send + Sync + 'static,
    A: Action,
    X: Send + Sync + 'static,
{
    pub(super) fn new(bound: BoundComponent<C, S, A, X>, own_props: Props) -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            id: ComponentId::next(),
            bound,
            this: this.clone(),
            lifecycle: Mutex::new(Lifecycle {
                phase: Phase::Unmounted,
                own_props,
                rendered: None,
                renders: 0,
            }),
        })
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.lock().phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase() == Phase::Mounted
    }

    pub fn own_props(&self) -> Props {
        self.lifecycle.lock().own_props.clone()
    }

    /// Props passed to the last render, if any.
    pub fn rendered_props(&self) -> Option<Props> {
        self.lifecycle.lock().rendered.clone()
    }

    pub fn render_count(&self) -> u64 {
        self.lifecycle.lock().renders
    }

    pub fn bound(&self) -> &BoundComponent<C, S, A, X> {
        &self.bound
    }

    /// Render once, then register under the subscription name.
    /// No-op when already mounted.
    pub fn mount(&self) {
        if self.is_mounted() {
            return;
        }
        self.render();
        self.lifecycle.lock().phase = Phase::Mounted;

        let Some(this) = self.this.upgrade() else {
            return;
        };
        let handle: Arc<dyn ComponentHandle> = this;
        self.bound.connector().components().add(self.bound.subscription(), &handle);
        tracing::debug!(
            component = %self.id,
            subscription = %self.bound.subscription(),
            "Mounted"
        );
    }

    /// Deregister. Safe to call repeatedly.
    pub fn unmount(&self) {
        {
            let mut lifecycle = self.lifecycle.lock();
            if lifecycle.phase == Phase::Unmounted {
                return;
            }
            lifecycle.phase = Phase::Unmounted;
        }
        self.bound
            .connector()
            .components()
            .remove(self.bound.subscription(), self.id);
        tracing::debug!(
            component = %self.id,
            subscription = %self.bound.subscription(),
            "Unmounted"
        );
    }

    /// Parent re-rendered this instance with `own_props`.
    ///
    /// The props are always stored; whether a render follows is decided by
    /// the connector's [`UpdatePolicy`](super::UpdatePolicy). Returns
    /// whether it rendered.
    pub fn receive_props(&self, own_props: Props) -> bool {
        let policy = self.bound.connector().policy();
        let should_render = {
            let mut lifecycle = self.lifecycle.lock();
            let previous = std::mem::replace(&mut lifecycle.own_props, own_props);
            lifecycle.phase == Phase::Mounted && policy.should_update(&previous, &lifecycle.own_props)
        };
        if should_render {
            self.render();
        } else {
            tracing::trace!(component = %self.id, ?policy, "Suppressed parent-driven render");
        }
        should_render
    }

    /// Defaults, then own props, then injected props; later layers win.
    fn compute_props(&self, own_props: Props) -> Props {
        let injected = self.bound.select(&own_props);
        let defaults = self
            .bound
            .meta()
            .map(|meta| meta.default_props.clone())
            .unwrap_or_default();
        defaults.merged(own_props).merged(injected)
    }

    fn render(&self) {
        let own_props = self.own_props();
        let props = self.compute_props(own_props);
        self.emit(props);
    }

    fn emit(&self, props: Props) {
        if let Some(meta) = self.bound.meta() {
            for violation in meta.validate(&props) {
                tracing::warn!(
                    component = %self.bound.display_name(),
                    %violation,
                    "Prop type check failed"
                );
            }
        }

        tracing::trace!(component = %self.id, subscription = %self.bound.subscription(), "Rendering");
        self.bound.inner().render(&props);

        let mut lifecycle = self.lifecycle.lock();
        lifecycle.rendered = Some(props);
        lifecycle.renders += 1;
    }
}

impl<C, S, A, X> ComponentHandle for Instance<C, S, A, X>
where
    C: Presentational,
    S: Send + Sync + 'static,
    A: Action,
    X: Send + Sync + 'static,
{
    fn id(&self) -> ComponentId {
        self.id
    }

    fn subscription(&self) -> &str {
        self.bound.subscription()
    }

    fn refresh(&self) {
        if !self.is_mounted() {
            tracing::trace!(component = %self.id, "Refresh on unmounted instance skipped");
            return;
        }
        self.render();
    }

    fn patch(&self, props: Props) {
        let base = {
            let lifecycle = self.lifecycle.lock();
            if lifecycle.phase != Phase::Mounted {
                tracing::trace!(component = %self.id, "Patch on unmounted instance skipped");
                return;
            }
            lifecycle.rendered.clone()
        };
        let base = match base {
            Some(rendered) => rendered,
            None => self.compute_props(self.own_props()),
        };
        self.emit(base.merged(props));
    }
}

impl<C, S, A, X> Drop for Instance<C, S, A, X> {
    fn drop(&mut self) {
        if self.lifecycle.get_mut().phase == Phase::Mounted {
            self.bound
                .connector()
                .components()
                .remove(self.bound.subscription(), self.id);
        }
    }
}
