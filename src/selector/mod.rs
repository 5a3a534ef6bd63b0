//! Named selectors and the prop sets they produce.

mod props;
mod registry;

pub use props::Props;
pub use registry::{Selector, SelectorMap, SelectorRegistry};
