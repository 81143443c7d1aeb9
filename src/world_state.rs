use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A predicate set: a mapping from predicate name to boolean truth value.
///
/// A key absent from the map is *unknown*, not `false` — see [`crate::matcher::satisfies`]
/// for how the planner treats that distinction. `WorldState` never mutates in place once
/// handed to a [`crate::plan::node::SearchNode`]; every transformation (`set`, `clone`, the
/// planner's [`crate::applicator::apply`]) produces an independent value.
///
/// `BTreeMap` is used rather than a hash map so that [`WorldState::iter`] yields a stable,
/// sorted order regardless of insertion order — nothing observable about the planner's
/// result may depend on hash iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorldState(BTreeMap<String, bool>);

impl WorldState {
    /// Creates a new, empty world state.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insertion; returns `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: bool) -> Self {
        self.set(key, value);
        self
    }

    /// Inserts or replaces the value for `key`.
    pub fn set(&mut self, key: impl Into<String>, value: bool) {
        self.0.insert(key.into(), value);
    }

    /// Returns the truth value of `key`, or `None` if it is unknown.
    pub fn get(&self, key: &str) -> Option<bool> {
        self.0.get(key).copied()
    }

    /// Returns `true` if `key` is present (known), regardless of its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of known predicates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if no predicates are known.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates all known `(name, value)` pairs in a stable, sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Overlays every `(key, value)` of `other` onto a clone of `self`, insert-or-replace.
    ///
    /// This is the building block [`crate::applicator::apply`] uses to turn an action's
    /// postconditions into a successor state.
    pub fn overlay(&self, other: &WorldState) -> WorldState {
        let mut merged = self.clone();
        for (key, value) in other.iter() {
            merged.set(key, value);
        }
        merged
    }
}

impl From<Vec<(String, bool)>> for WorldState {
    fn from(pairs: Vec<(String, bool)>) -> Self {
        let mut state = WorldState::new();
        for (key, value) in pairs {
            state.set(key, value);
        }
        state
    }
}

impl fmt::Display for WorldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_key_is_unknown() {
        let state = WorldState::new().with("Awake", true);
        assert_eq!(state.get("Awake"), Some(true));
        assert_eq!(state.get("Employed"), None);
    }

    #[test]
    fn set_replaces_existing_value() {
        let mut state = WorldState::new().with("Door", false);
        state.set("Door", true);
        assert_eq!(state.get("Door"), Some(true));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn clone_is_independent() {
        let original = WorldState::new().with("X", true);
        let mut cloned = original.clone();
        cloned.set("X", false);
        assert_eq!(original.get("X"), Some(true));
        assert_eq!(cloned.get("X"), Some(false));
    }

    #[test]
    fn overlay_inserts_and_replaces_without_mutating_operands() {
        let base = WorldState::new().with("A", true).with("B", false);
        let patch = WorldState::new().with("B", true).with("C", true);
        let merged = base.overlay(&patch);

        assert_eq!(merged.get("A"), Some(true));
        assert_eq!(merged.get("B"), Some(true));
        assert_eq!(merged.get("C"), Some(true));
        // operands unchanged
        assert_eq!(base.get("B"), Some(false));
        assert_eq!(base.get("C"), None);
    }

    #[test]
    fn iteration_order_is_stable_and_sorted() {
        let state = WorldState::new().with("zebra", true).with("apple", false);
        let keys: Vec<_> = state.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["apple", "zebra"]);
    }
}
