use serde::{Deserialize, Serialize};

use crate::matcher::satisfies;
use crate::world_state::WorldState;

/// A named, costed transformer of world states.
///
/// An `Action` is immutable once constructed and is never mutated by the planner — the
/// library handed to [`crate::plan::planner::plan`] is read-only for the duration of the
/// call. `preconditions` and `postconditions` are independent predicate sets: a
/// postcondition may assert a value identical to, opposite of, or disjoint from any
/// precondition.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Action {
    /// Non-empty, unique within the library passed to a single `plan` call.
    pub name: String,
    /// Non-negative cost contributed to a plan each time this action is used.
    pub cost: u32,
    /// Predicate set that must be satisfied (see `satisfies`) before this action may run.
    #[serde(default, rename = "preConditions")]
    pub pre_conditions: WorldState,
    /// Predicate set overlaid onto the applying state to produce the successor state.
    #[serde(default, rename = "postConditions")]
    pub post_conditions: WorldState,
}

impl Action {
    /// Creates a new zero-cost action with empty pre/post conditions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cost: 0,
            pre_conditions: WorldState::new(),
            post_conditions: WorldState::new(),
        }
    }

    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    pub fn with_precondition(mut self, key: impl Into<String>, value: bool) -> Self {
        self.pre_conditions.set(key, value);
        self
    }

    pub fn with_postcondition(mut self, key: impl Into<String>, value: bool) -> Self {
        self.post_conditions.set(key, value);
        self
    }

    /// `true` iff `state` satisfies every one of this action's preconditions.
    pub fn is_executable_in(&self, state: &WorldState) -> bool {
        satisfies(state, &self.pre_conditions)
    }
}
