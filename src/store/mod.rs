//! Shared state storage.
//!
//! Holds the single current state snapshot that selectors read from.

mod holder;

pub use holder::StateHolder;
