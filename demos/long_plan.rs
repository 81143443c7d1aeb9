//! This example shows a longer plan assembled from a chain of boolean predicates,
//! modeled after the classic GOAP "get ready for work" scenario.

use goap_planner::prelude::*;

fn main() {
    let start = WorldState::new().with("Awake", false);

    let goal = WorldState::new()
        .with("Awake", false)
        .with("Employed", true)
        .with("Happy", true)
        .with("Clean", true);

    let wake_up = Action::new("wake_up")
        .with_cost(1)
        .with_precondition("Awake", false)
        .with_postcondition("Awake", true);

    let shower = Action::new("shower")
        .with_cost(1)
        .with_precondition("Awake", true)
        .with_postcondition("Clean", true);

    let get_dressed = Action::new("get_dressed")
        .with_cost(1)
        .with_precondition("Clean", true)
        .with_postcondition("Dressed", true);

    let commute = Action::new("commute")
        .with_cost(2)
        .with_precondition("Dressed", true)
        .with_postcondition("AtWork", true);

    let work = Action::new("work")
        .with_cost(3)
        .with_precondition("AtWork", true)
        .with_postcondition("Employed", true)
        .with_postcondition("Happy", true);

    let go_back_to_sleep = Action::new("go_back_to_sleep")
        .with_cost(1)
        .with_precondition("Awake", true)
        .with_postcondition("Awake", false);

    let actions = vec![
        wake_up,
        shower,
        get_dressed,
        commute,
        work,
        go_back_to_sleep,
    ];

    let outcome = plan(&start, &goal, &actions);
    println!("Plan ({} steps):", outcome.actions.len());
    for (step, action) in outcome.actions.iter().enumerate() {
        println!("{}. {} (cost {})", step + 1, action.name, action.cost);
    }
}
