//! End-to-end: load an action library from the JSON document shape, then plan over it.

use goap_planner::prelude::*;

const DOCUMENT: &str = r#"{
    "actions": [
        {
            "name": "buy_food",
            "cost": 2,
            "preConditions": {},
            "postConditions": { "has_food": true }
        },
        {
            "name": "eat",
            "cost": 1,
            "preConditions": { "has_food": true },
            "postConditions": { "is_hungry": false, "has_food": false }
        }
    ]
}"#;

#[test]
fn loaded_library_plans_correctly() {
    let actions = load_actions(DOCUMENT).expect("document should parse");
    assert_eq!(actions.len(), 2);

    let initial = WorldState::new().with("is_hungry", true).with("has_food", false);
    let goal = WorldState::new().with("is_hungry", false);

    let outcome = plan(&initial, &goal, &actions);

    let names: Vec<&str> = outcome.actions.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["buy_food", "eat"]);
    assert!(outcome.signal.is_none());
}

#[test]
fn malformed_document_never_reaches_the_planner() {
    let result = load_actions(r#"{"actions": [{"name": "x"}]}"#);
    assert!(result.is_err());
}

#[test]
fn planner_is_reusable_across_independent_calls_sharing_a_library() {
    let actions = load_actions(DOCUMENT).expect("document should parse");

    let call_one = plan(
        &WorldState::new().with("is_hungry", true).with("has_food", false),
        &WorldState::new().with("is_hungry", false),
        &actions,
    );
    let call_two = plan(
        &WorldState::new().with("is_hungry", true).with("has_food", true),
        &WorldState::new().with("is_hungry", false),
        &actions,
    );

    assert_eq!(call_one.actions.len(), 2);
    assert_eq!(call_two.actions.len(), 1);
    assert_eq!(call_two.actions[0].name, "eat");
}
