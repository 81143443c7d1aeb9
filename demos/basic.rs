use goap_planner::prelude::*;

fn main() {
    // Define the initial world state
    let start = WorldState::new().with("is_hungry", true).with("has_food", false);

    // Define the goal: not hungry
    let goal = WorldState::new().with("is_hungry", false);

    // Define available actions
    let buy_food = Action::new("buy_food")
        .with_cost(2)
        .with_postcondition("has_food", true);

    let eat = Action::new("eat")
        .with_cost(1)
        .with_precondition("has_food", true)
        .with_postcondition("is_hungry", false)
        .with_postcondition("has_food", false);

    let actions = vec![buy_food, eat];

    // Find the optimal plan
    let outcome = plan(&start, &goal, &actions);
    for (step, action) in outcome.actions.iter().enumerate() {
        println!("{}. {} (cost {})", step + 1, action.name, action.cost);
    }
}
