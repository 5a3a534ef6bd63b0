//! Base trait for application state in MVI architecture.

/// Marker trait for state snapshots held by the connector.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data selectors need to derive props)
/// - Shareable across threads (snapshots are handed out as `Arc`)
pub trait UiState: Clone + Send + Sync + 'static {}

impl<T> UiState for T where T: Clone + Send + Sync + 'static {}
