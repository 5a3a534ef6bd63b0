//! Base trait for actions (user/system events) in MVI architecture.

/// An action describes a state transition request.
///
/// Actions represent:
/// - User actions (button clicks, key presses)
/// - System events (API responses, timers)
///
/// Actions are processed by reducers to produce new states, and by the
/// matcher to decide which subscriptions must refresh.
pub trait Action: Send + Sync + 'static {
    /// Stable name used by route tables (the "type" of the action).
    ///
    /// Defaults to the Rust type name, so enums with more than one
    /// variant should override it.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl Action for String {
    fn name(&self) -> &str {
        self
    }
}

impl Action for &'static str {
    fn name(&self) -> &str {
        self
    }
}
