//! Binding presentational components to subscription names.
//!
//! ```text
//! Connector::bind(name) ──→ Binding ──wrap(component)──→ BoundComponent
//!                                                           │ instantiate(own props)
//!                                                           ▼
//!                          Unmounted ──mount()──→ Mounted ──unmount()──→ Unmounted
//! ```
//!
//! A mounted [`Instance`] is registered in the connector's component
//! registry. Each refresh recomputes its props through the selector
//! registry and asks the presentational component to render them.

mod bound;
mod component;
mod instance;
mod meta;
mod policy;

pub use bound::{Binding, BoundComponent};
pub use component::Presentational;
pub use instance::{Instance, Phase};
pub use meta::{ComponentMeta, PropKind, PropType, PropViolation};
pub use policy::UpdatePolicy;
