//! Action-library ingestion: deserializes the JSON action-library document shape into
//! `Vec<Action>`.
//!
//! This is an external collaborator to the planner core, not part of it — the
//! planner trusts whatever `Vec<Action>` it is handed and performs none of the validation
//! this module does. A malformed document fails loudly here, before the planner ever
//! sees it.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::action::Action;
use crate::error::LoaderError;
use crate::world_state::WorldState;

#[derive(Deserialize)]
struct Document {
    actions: Vec<Value>,
}

/// Parses a JSON document of the shape:
///
/// ```json
/// {
///   "actions": [
///     { "name": "wake", "cost": 1, "preConditions": {}, "postConditions": { "Awake": true } }
///   ]
/// }
/// ```
///
/// into a validated `Vec<Action>`. Fails on any shape mismatch, missing required field,
/// wrong-typed field, or duplicate `name` — it never silently drops or coerces a
/// malformed entry.
pub fn load_actions(document: &str) -> Result<Vec<Action>, LoaderError> {
    let raw: Value = serde_json::from_str(document)?;
    let doc: Document = serde_json::from_value(raw).map_err(|_| LoaderError::MissingActionsArray)?;

    let mut actions = Vec::with_capacity(doc.actions.len());
    let mut seen_names = HashSet::new();

    for (index, entry) in doc.actions.iter().enumerate() {
        let object = entry
            .as_object()
            .ok_or(LoaderError::WrongFieldType { index, field: "action" })?;

        let name = object
            .get("name")
            .ok_or(LoaderError::MissingField { index, field: "name" })?
            .as_str()
            .ok_or(LoaderError::WrongFieldType { index, field: "name" })?
            .to_string();

        let cost = object
            .get("cost")
            .ok_or(LoaderError::MissingField { index, field: "cost" })?;
        let cost = cost
            .as_u64()
            .ok_or(LoaderError::WrongFieldType { index, field: "cost" })?;
        let cost = u32::try_from(cost)
            .map_err(|_| LoaderError::WrongFieldType { index, field: "cost" })?;

        let pre_conditions = parse_predicate_set(object, index, "preConditions")?;
        let post_conditions = parse_predicate_set(object, index, "postConditions")?;

        if !seen_names.insert(name.clone()) {
            return Err(LoaderError::DuplicateName(name));
        }

        actions.push(Action {
            name,
            cost,
            pre_conditions,
            post_conditions,
        });
    }

    Ok(actions)
}

fn parse_predicate_set(
    object: &serde_json::Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<WorldState, LoaderError> {
    let raw = object
        .get(field)
        .ok_or(LoaderError::MissingField { index, field })?;
    let map = raw
        .as_object()
        .ok_or(LoaderError::WrongFieldType { index, field })?;

    let mut state = WorldState::new();
    for (key, value) in map {
        let value = value
            .as_bool()
            .ok_or(LoaderError::WrongFieldType { index, field })?;
        state.set(key.clone(), value);
    }
    Ok(state)
}
