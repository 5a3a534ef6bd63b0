use serde::{Deserialize, Serialize};

use crate::binding::UpdatePolicy;
use crate::matcher::RouteTable;

/// Root settings container.
///
/// ```toml
/// [render]
/// policy = "props_changed"
///
/// [routes]
/// INC = ["counter"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub render: RenderSettings,
    /// Action name → subscriptions it invalidates.
    #[serde(default)]
    pub routes: RouteTable,
}

/// Rendering behaviour of bound components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Policy for parent-driven re-renders (default: "props_changed").
    #[serde(default)]
    pub policy: UpdatePolicy,
}
