//! The host-side presentational component contract.

use super::meta::ComponentMeta;
use crate::selector::Props;

/// A presentational component supplied by the host UI framework.
///
/// `render` is the host's re-render request; the host may schedule or
/// batch it as it likes.
pub trait Presentational: Send + Sync + 'static {
    /// Declared name, used as the subscription key when a binding does not
    /// name one.
    fn name(&self) -> &str;

    fn meta(&self) -> Option<&ComponentMeta> {
        None
    }

    fn render(&self, props: &Props);
}
