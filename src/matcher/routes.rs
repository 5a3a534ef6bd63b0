//! Static action-name routing.
//!
//! ```toml
//! [routes]
//! INC = ["counter"]
//! RESET = ["counter", "header"]
//! ```

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use super::result::{matcher, MatchResult, Matcher, Transition};
use crate::mvi::Action;

/// Mapping from action name to the subscriptions it invalidates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: BTreeMap<String, Vec<String>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`RouteTable::insert`].
    pub fn route<I, N>(mut self, action: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.insert(action, names);
        self
    }

    /// Set the targets of `action`, replacing any earlier declaration.
    pub fn insert<I, N>(&mut self, action: impl Into<String>, names: I)
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.routes
            .insert(action.into(), names.into_iter().map(Into::into).collect());
    }

    /// Merge another table into this one. Actions declared in `other`
    /// override this table's targets; all others are kept.
    pub fn extend(&mut self, other: RouteTable) {
        self.routes.extend(other.routes);
    }

    pub fn targets(&self, action: &str) -> Option<&[String]> {
        self.routes.get(action).map(Vec::as_slice)
    }

    /// Classify an action by name.
    pub fn classify(&self, action: &str) -> MatchResult {
        match self.routes.get(action) {
            Some(names) if !names.is_empty() => MatchResult::Refresh(names.clone()),
            _ => MatchResult::NoMatch,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.routes.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Turn the table into a matcher keyed on [`Action::name`].
    pub fn into_matcher<S: 'static, A: Action>(self) -> Matcher<S, A> {
        matcher(move |transition: &Transition<'_, S, A>| self.classify(transition.action.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_returns_targets_in_declared_order() {
        let table = RouteTable::new().route("RESET", ["counter", "header"]);
        assert_eq!(table.classify("RESET").targets(), ["counter", "header"]);
    }

    #[test]
    fn unknown_or_empty_routes_do_not_match() {
        let table = RouteTable::new().route("NOOP", Vec::<String>::new());
        assert!(!table.classify("NOOP").is_match());
        assert!(!table.classify("MISSING").is_match());
    }

    #[test]
    fn extend_overrides_redeclared_actions_and_keeps_the_rest() {
        let mut table = RouteTable::new().route("INC", ["counter"]).route("RESET", ["header"]);
        table.extend(RouteTable::new().route("INC", ["badge"]).route("DEC", ["counter"]));

        assert_eq!(table.targets("INC").unwrap(), ["badge"]);
        assert_eq!(table.targets("DEC").unwrap(), ["counter"]);
        assert_eq!(table.targets("RESET").unwrap(), ["header"]);
    }

    #[test]
    fn redeclaring_a_route_replaces_its_targets() {
        let table = RouteTable::new().route("INC", ["a"]).route("INC", ["b"]);
        assert_eq!(table.targets("INC").unwrap(), ["b"]);
    }

    #[test]
    fn matcher_uses_action_name() {
        let route_matcher = RouteTable::new().route("INC", ["counter"]).into_matcher::<u8, String>();
        let action = String::from("INC");
        let result = route_matcher(&Transition {
            state: &0,
            next_state: &1,
            action: &action,
        });
        assert_eq!(result.targets(), ["counter"]);
    }

    #[test]
    fn deserializes_from_toml_table() {
        let table: RouteTable = toml::from_str("INC = [\"counter\"]\nRESET = [\"a\", \"b\"]").unwrap();
        assert_eq!(table.classify("RESET").targets(), ["a", "b"]);
    }
}
