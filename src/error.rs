//! The core's non-fatal diagnostic signal and the loader's conventional error type.
//!
//! The planner itself never panics and never returns an `Err` — every failure mode
//! downgrades to an empty plan plus an optional [`PlanSignal`]. [`LoaderError`] is a
//! real, recoverable `Result`-based error, but it belongs to the JSON action-library
//! loader, not to the planner.

use thiserror::Error;

/// Informational signal distinguishing the reasons a `plan` call can return an empty plan.
///
/// None of these are errors: the core never throws or panics. A caller that wants to
/// tell "no planning needed" from "no plan possible" can match on this instead of
/// pre-checking `satisfies` themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSignal {
    /// `satisfies(initial, goal)` already held on entry; the returned plan is empty
    /// because no actions were needed, not because none were found.
    AlreadySatisfied,
    /// No action's preconditions matched the initial state, so the search explored zero
    /// neighbors from the root.
    NoExecutableAction,
    /// The search completed (the frontier emptied) without any solution being recorded.
    NoSolutionFound,
}

impl PlanSignal {
    /// Emits this signal through the `log` facade at the appropriate level:
    /// informational for `AlreadySatisfied`, a warning for the other two.
    pub(crate) fn log(self) {
        match self {
            PlanSignal::AlreadySatisfied => {
                log::info!("goal already satisfied by the initial world state; returning empty plan");
            }
            PlanSignal::NoExecutableAction => {
                log::warn!("no action in the library is executable from the initial world state");
            }
            PlanSignal::NoSolutionFound => {
                log::warn!("search exhausted the reachable state space without satisfying the goal");
            }
        }
    }
}

/// Failure modes of the out-of-core action-library loader.
///
/// The loader fails loudly on any shape mismatch rather than silently dropping or
/// guessing at malformed entries — the planner core never sees a document that didn't
/// parse cleanly.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("document is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("document has no top-level \"actions\" array")]
    MissingActionsArray,

    #[error("action at index {index} is missing required field \"{field}\"")]
    MissingField { index: usize, field: &'static str },

    #[error("action at index {index} has wrong type for field \"{field}\"")]
    WrongFieldType { index: usize, field: &'static str },

    #[error("duplicate action name \"{0}\"")]
    DuplicateName(String),
}
