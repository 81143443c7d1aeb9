pub use crate::action::Action;
pub use crate::applicator::apply;
pub use crate::error::{LoaderError, PlanSignal};
pub use crate::loader::load_actions;
pub use crate::matcher::{satisfies, satisfies_strict};
pub use crate::plan::node::SearchNode;
pub use crate::plan::planner::{plan, PlanOutcome};
pub use crate::world_state::WorldState;
