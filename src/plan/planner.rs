//! The search: exhaustive depth-first enumeration of acyclic action sequences, followed
//! by an explicit minimum selection.

use crate::action::Action;
use crate::error::PlanSignal;
use crate::matcher::satisfies;
use crate::plan::node::SearchNode;
use crate::world_state::WorldState;

/// The result of a `plan` call: the plan itself (possibly empty) plus an optional
/// informational [`PlanSignal`] explaining *why* an empty plan was returned, if it was.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlanOutcome {
    pub actions: Vec<Action>,
    pub signal: Option<PlanSignal>,
}

impl PlanOutcome {
    fn empty(signal: PlanSignal) -> Self {
        signal.log();
        Self {
            actions: Vec::new(),
            signal: Some(signal),
        }
    }

    fn found(actions: Vec<Action>) -> Self {
        Self {
            actions,
            signal: None,
        }
    }
}

/// Finds a minimum-cost ordered sequence of actions that transforms `initial` into a
/// state satisfying `goal`, using the actions available in `library`.
///
/// This is a pure function: `initial`, `goal`, and every action in `library` are
/// unchanged after the call. Two calls with identical arguments return identical
/// outcomes, regardless of `library`'s element order — candidates are always
/// considered in a name-sorted order internally, so the caller's ordering of
/// `library` cannot influence the result.
pub fn plan(initial: &WorldState, goal: &WorldState, library: &[Action]) -> PlanOutcome {
    if satisfies(initial, goal) {
        return PlanOutcome::empty(PlanSignal::AlreadySatisfied);
    }

    let mut sorted_library: Vec<&Action> = library.iter().collect();
    sorted_library.sort_by(|a, b| a.name.cmp(&b.name));

    let initial_has_neighbor = sorted_library
        .iter()
        .any(|action| action.is_executable_in(initial));

    let mut frontier: Vec<SearchNode> = vec![SearchNode::root(initial)];
    let mut solutions: Vec<SearchNode> = Vec::new();

    while let Some(node) = frontier.pop() {
        for &action in &sorted_library {
            if !action.is_executable_in(&node.world_state) || node.has_taken(action) {
                continue;
            }

            let next_state = crate::applicator::apply(action, &node.world_state);
            let child = node.expand(action, next_state);

            if satisfies(&child.world_state, goal) {
                solutions.push(child);
            } else {
                frontier.push(child);
            }
        }
    }

    if solutions.is_empty() {
        let signal = if initial_has_neighbor {
            PlanSignal::NoSolutionFound
        } else {
            PlanSignal::NoExecutableAction
        };
        return PlanOutcome::empty(signal);
    }

    // Stable sort: lower cost wins, then shorter length; ties keep DFS discovery order
    // (the "first-found among equals" rule).
    solutions.sort_by(|a, b| a.cost.cmp(&b.cost).then(a.parents.len().cmp(&b.parents.len())));

    PlanOutcome::found(solutions.into_iter().next().unwrap().parents)
}
