//! Closed-world-assumption predicate-set matching.
//!
//! This is the one relation used everywhere state is compared against an expectation:
//! action preconditions, the goal test, and nowhere else.

use crate::world_state::WorldState;

/// Returns `true` iff, for every `(key, value)` in `required`, `state.get(key) == Some(value)`.
///
/// A key present in `required` but missing from `state` is *unknown*, which counts as a
/// non-match — this is the STRIPS closed-world assumption: callers must assert every
/// predicate they care about, including negative ones.
pub fn satisfies(state: &WorldState, required: &WorldState) -> bool {
    required
        .iter()
        .all(|(key, value)| state.get(key) == Some(value))
}

/// Like [`satisfies`], but additionally requires `state` and `required` to have the same
/// number of known predicates. Not used by the planner itself — intended for test
/// utilities that want to assert an exact world-state shape rather than a superset match.
pub fn satisfies_strict(state: &WorldState, required: &WorldState) -> bool {
    state.len() == required.len() && satisfies(state, required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_requirement_is_always_satisfied() {
        let state = WorldState::new().with("A", false);
        assert!(satisfies(&state, &WorldState::new()));
    }

    #[test]
    fn missing_key_does_not_satisfy() {
        let state = WorldState::new().with("A", true);
        let required = WorldState::new().with("B", true);
        assert!(!satisfies(&state, &required));
    }

    #[test]
    fn missing_key_is_unknown_not_false() {
        // A required `false` is NOT satisfied by an absent key, even though "absent"
        // might naively be read as "false". This is the closed-world assumption.
        let state = WorldState::new();
        let required = WorldState::new().with("B", false);
        assert!(!satisfies(&state, &required));
    }

    #[test]
    fn mismatched_value_does_not_satisfy() {
        let state = WorldState::new().with("A", false);
        let required = WorldState::new().with("A", true);
        assert!(!satisfies(&state, &required));
    }

    #[test]
    fn superset_state_satisfies() {
        let state = WorldState::new().with("A", true).with("Extra", true);
        let required = WorldState::new().with("A", true);
        assert!(satisfies(&state, &required));
        assert!(!satisfies_strict(&state, &required));
    }

    #[test]
    fn strict_requires_exact_key_count() {
        let state = WorldState::new().with("A", true);
        let required = WorldState::new().with("A", true);
        assert!(satisfies_strict(&state, &required));
    }
}
