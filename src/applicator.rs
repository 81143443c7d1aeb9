//! Produces successor world states by overlaying an action's postconditions.

use crate::action::Action;
use crate::world_state::WorldState;

/// Returns an independent state equal to `state` with every `(key, value)` of
/// `action.post_conditions` overlaid (insert-or-replace). `state` itself is unmodified.
///
/// No precondition check is performed here — the caller (the planner's frontier
/// expansion) guarantees `action` is executable in `state` before calling this.
pub fn apply(action: &Action, state: &WorldState) -> WorldState {
    state.overlay(&action.post_conditions)
}
