//! Classification of state transitions into refresh targets.
//!
//! A matcher inspects a [`Transition`] and returns a [`MatchResult`]
//! naming the subscriptions that must refresh. [`RouteTable`] builds a
//! matcher from a static action-name → subscriptions mapping.

mod result;
mod routes;

pub use result::{matcher, HandleCallback, MatchResult, Matcher, Transition};
pub use routes::RouteTable;
