//! A symbolic Goal-Oriented Action Planner (GOAP) core.
//!
//! Given a current [`world_state::WorldState`], a desired goal `WorldState`, and a
//! library of costed [`action::Action`]s, [`plan::planner::plan`] returns a minimum-cost
//! ordered sequence of actions whose cumulative effect transforms the current state into
//! one that satisfies the goal.
//!
//! The search is an exhaustive depth-first enumeration of acyclic action sequences
//! (actions may not repeat within a single plan) followed by an explicit cheapest-first
//! selection; see [`plan::planner`] for the algorithm and its tie-break rules.
//!
//! Predicate matching is closed-world: a predicate absent from a state is *unknown*, and
//! an `unknown` predicate never satisfies a requirement, positive or negative. See
//! [`matcher::satisfies`].

pub mod action;
pub mod applicator;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod plan;
pub mod prelude;
pub mod world_state;

pub use action::Action;
pub use error::{LoaderError, PlanSignal};
pub use plan::planner::{plan, PlanOutcome};
pub use world_state::WorldState;
