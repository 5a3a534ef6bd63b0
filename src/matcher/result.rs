//! Transition classification results.
//!
//! A [`MatchResult`] names the subscriptions a transition invalidates and
//! whether they refresh or receive a callback.

use std::fmt;
use std::sync::Arc;

use crate::registry::ComponentHandle;

/// One state replace cycle.
pub struct Transition<'a, S, A> {
    /// State before the action was applied.
    pub state: &'a S,
    /// State after the action was applied (already published).
    pub next_state: &'a S,
    pub action: &'a A,
}

/// Callback run per matched component in place of a bare refresh.
pub type HandleCallback = Arc<dyn Fn(&dyn ComponentHandle) + Send + Sync>;

/// Classifies a transition into refresh targets.
pub type Matcher<S, A> = Arc<dyn Fn(&Transition<'_, S, A>) -> MatchResult + Send + Sync>;

/// Box a closure as a [`Matcher`].
pub fn matcher<S, A, F>(f: F) -> Matcher<S, A>
where
    F: Fn(&Transition<'_, S, A>) -> MatchResult + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Which subscriptions a transition invalidates, and how.
#[derive(Clone, Default)]
pub enum MatchResult {
    /// Refresh every component under each name, in order. Duplicate names
    /// refresh twice.
    Refresh(Vec<String>),
    /// Run `callback` on every component under each name instead of
    /// refreshing it.
    Callback {
        names: Vec<String>,
        callback: HandleCallback,
    },
    #[default]
    NoMatch,
}

impl MatchResult {
    /// Refresh a single subscription.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Refresh(vec![name.into()])
    }

    /// Refresh several subscriptions in order.
    pub fn names<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self::Refresh(names.into_iter().map(Into::into).collect())
    }

    /// Run `callback` on every component under `names`.
    pub fn callback<I, N, F>(names: I, callback: F) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
        F: Fn(&dyn ComponentHandle) + Send + Sync + 'static,
    {
        Self::Callback {
            names: names.into_iter().map(Into::into).collect(),
            callback: Arc::new(callback),
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }

    /// Subscription names targeted by this result.
    pub fn targets(&self) -> &[String] {
        match self {
            Self::Refresh(names) | Self::Callback { names, .. } => names,
            Self::NoMatch => &[],
        }
    }
}

impl fmt::Debug for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Refresh(names) => f.debug_tuple("Refresh").field(names).finish(),
            Self::Callback { names, .. } => f
                .debug_struct("Callback")
                .field("names", names)
                .finish_non_exhaustive(),
            Self::NoMatch => f.write_str("NoMatch"),
        }
    }
}

impl From<&str> for MatchResult {
    fn from(name: &str) -> Self {
        Self::name(name)
    }
}

impl From<String> for MatchResult {
    fn from(name: String) -> Self {
        Self::name(name)
    }
}

impl<N: Into<String>> From<Vec<N>> for MatchResult {
    fn from(names: Vec<N>) -> Self {
        Self::names(names)
    }
}

impl<N: Into<String>, const LEN: usize> From<[N; LEN]> for MatchResult {
    fn from(names: [N; LEN]) -> Self {
        Self::names(names)
    }
}

impl<T: Into<MatchResult>> From<Option<T>> for MatchResult {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NoMatch, Into::into)
    }
}
