//! Reducer wrapper that publishes transitions.

use super::Connector;
use crate::mvi::{Action, Reducer, UiState};

/// A reducer that, after computing the next state, publishes it to the
/// connector and fans out the matched invalidations before returning.
///
/// It is itself a [`Reducer`], so it drops in wherever the host expects
/// one.
pub struct WrappedReducer<R, S, A, X> {
    reducer: R,
    connector: Connector<S, A, X>,
}

impl<R, S, A, X> WrappedReducer<R, S, A, X> {
    pub(super) fn new(reducer: R, connector: Connector<S, A, X>) -> Self {
        Self { reducer, connector }
    }

    pub fn inner(&self) -> &R {
        &self.reducer
    }

    pub fn connector(&self) -> &Connector<S, A, X> {
        &self.connector
    }
}

impl<R, S, A, X> Reducer<S, A> for WrappedReducer<R, S, A, X>
where
    R: Reducer<S, A>,
    S: UiState,
    A: Action,
    X: Send + Sync + 'static,
{
    fn reduce(&self, state: &S, action: &A) -> S {
        let next = self.reducer.reduce(state, action);
        self.connector.commit(state, next.clone(), action);
        next
    }
}
