//! Re-render policy for parent-driven updates.

use serde::{Deserialize, Serialize};

/// What a bound instance does when its parent re-renders it.
///
/// Explicit invalidation (a matched transition) always refreshes; the
/// policy only governs passive updates arriving through
/// [`Instance::receive_props`](super::Instance::receive_props).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Re-render on every parent render.
    Always,
    /// Re-render only when the parent's own props differ from the last ones.
    #[default]
    PropsChanged,
    /// Never re-render passively; new own props are stored and used by the
    /// next explicit refresh.
    Never,
}

impl UpdatePolicy {
    pub fn should_update(self, previous: &crate::Props, next: &crate::Props) -> bool {
        match self {
            Self::Always => true,
            Self::PropsChanged => previous != next,
            Self::Never => false,
        }
    }
}
