//! propwire: a minimal state-connector runtime.
//!
//! Components subscribe by name to slices of one shared state. After each
//! state transition a user-supplied matcher names the subscriptions that
//! must refresh, and only those components recompute their props and
//! re-render.
//!
//! ```
//! use propwire::{Connector, ConnectorConfig, MatchResult, Props, Reducer};
//!
//! #[derive(Clone)]
//! struct Counter {
//!     count: i64,
//! }
//!
//! let connector: Connector<Counter, String> = Connector::new(Counter { count: 0 });
//! connector.configure(
//!     ConnectorConfig::<Counter, String>::new()
//!         .selector("counter", |s: &Counter, _: &(), _: &Props, _: &[serde_json::Value]| {
//!             Props::new().with("count", s.count)
//!         })
//!         .matcher(|t| if t.action == "INC" { MatchResult::name("counter") } else { MatchResult::NoMatch }),
//! );
//!
//! let reducer = connector.wrap_reducer(|s: &Counter, _: &String| Counter { count: s.count + 1 });
//! let next = reducer.reduce(&Counter { count: 0 }, &"INC".to_string());
//! assert_eq!(next.count, 1);
//! ```

pub mod binding;
pub mod config;
pub mod connector;
pub mod logging;
pub mod matcher;
pub mod mvi;
pub mod registry;
pub mod selector;
pub mod store;

pub use binding::{
    Binding, BoundComponent, ComponentMeta, Instance, Phase, Presentational, PropKind, PropType,
    UpdatePolicy,
};
pub use config::{ConfigError, Settings};
pub use connector::{Connector, ConnectorConfig, WrappedReducer};
pub use matcher::{MatchResult, RouteTable, Transition};
pub use mvi::{Action, Reducer};
pub use registry::{ComponentHandle, ComponentId, ComponentRegistry};
pub use selector::{Props, SelectorMap, SelectorRegistry};
pub use store::StateHolder;
