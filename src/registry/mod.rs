//! Registry of mounted components, grouped by subscription name.

mod components;
mod handle;

pub use components::ComponentRegistry;
pub use handle::{ComponentHandle, ComponentId};
