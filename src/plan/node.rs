//! Candidate partial plans explored by the planner's search.

use crate::action::Action;
use crate::world_state::WorldState;

/// A candidate partial plan: the ordered actions applied so far, the world state that
/// results from applying them in order to the initial state, and the accumulated cost.
///
/// Every `SearchNode` owns an independent `world_state` and `parents` — the applicator
/// never shares storage between a parent and its children, and `parents` is never aliased
/// between sibling branches. Violating either would let one branch's exploration corrupt
/// another's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// Actions applied, in order, to reach this node. Empty for the root node.
    pub parents: Vec<Action>,
    /// The world state after applying `parents` in order to the initial state.
    pub world_state: WorldState,
    /// `sum(a.cost for a in parents)`.
    pub cost: u32,
}

impl SearchNode {
    /// Creates the root node: no actions taken yet, wrapping a clone of the caller's
    /// initial state.
    pub fn root(initial_state: &WorldState) -> Self {
        Self {
            parents: Vec::new(),
            world_state: initial_state.clone(),
            cost: 0,
        }
    }

    /// `true` if `action.name` already appears among this node's `parents` — the
    /// anti-cycle rule: no action name may appear twice on a single path.
    pub fn has_taken(&self, action: &Action) -> bool {
        self.parents.iter().any(|taken| taken.name == action.name)
    }

    /// Produces the child node reached by applying `action` here, with a fresh, owned
    /// `parents` sequence and `world_state` — no aliasing with `self` or any sibling.
    pub fn expand(&self, action: &Action, next_state: WorldState) -> SearchNode {
        let mut parents = self.parents.clone();
        parents.push(action.clone());
        SearchNode {
            parents,
            world_state: next_state,
            cost: self.cost + action.cost,
        }
    }
}
