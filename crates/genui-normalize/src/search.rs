//! Breadth-first locate-the-spec search
//!
//! The model's tool-call arguments arrive with no fixed shape: the spec may
//! sit at the top level, under one of several wrapper keys, serialized as a
//! JSON string, or nested several layers deep. The search dequeues one
//! candidate at a time, parses string candidates, descends into wrapper
//! keys of object candidates, and stops at the first spec-like match.

use std::collections::VecDeque;

use serde_json::{Map, Value};

use crate::repair::repair_spec;

/// Wrapper keys searched on non-spec object candidates, in priority order
const WRAPPER_KEYS: [&str; 7] = [
    "json_schema",
    "spec",
    "schema",
    "output",
    "result",
    "data",
    "payload",
];

/// Default bound on dequeued candidates per normalization call
///
/// `serde_json::Value` is an owned tree, so the search always terminates;
/// the budget only caps pathological deep nesting. Exhausting it behaves
/// exactly like "no match".
pub const DEFAULT_MAX_SEARCH_NODES: usize = 4096;

/// Outcome of examining one candidate
enum Visit {
    /// Spec-like structure found and repaired
    Found(Value),

    /// Candidates to search next
    Descend(Vec<Value>),

    /// Nothing usable here
    Skip,
}

/// Whether a value already has the spec shape: a string `root` and a keyed
/// `elements` structure
#[must_use]
pub fn is_spec_like(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| spec_shape(object).is_some())
}

fn spec_shape(object: &Map<String, Value>) -> Option<()> {
    object.get("root")?.as_str()?;
    object.get("elements")?.as_object()?;
    Some(())
}

/// Normalize a model-produced value into the canonical render-spec shape
///
/// Returns the repaired spec on the first spec-like match, or the input
/// unchanged when the search finds nothing. Never fails; callers rely on
/// the downstream validation boundary to reject unusable input.
#[must_use]
pub fn normalize(value: Value) -> Value {
    normalize_with_budget(value, DEFAULT_MAX_SEARCH_NODES)
}

/// [`normalize`] with an explicit search-node budget
#[must_use]
pub fn normalize_with_budget(value: Value, max_nodes: usize) -> Value {
    match locate_spec(&value, max_nodes) {
        Some(spec) => spec,
        None => value,
    }
}

fn locate_spec(input: &Value, max_nodes: usize) -> Option<Value> {
    let mut queue: VecDeque<Value> = VecDeque::new();
    let mut dequeued = 0usize;

    match visit(input) {
        Visit::Found(spec) => return Some(spec),
        Visit::Descend(next) => queue.extend(next),
        Visit::Skip => {}
    }

    while let Some(candidate) = queue.pop_front() {
        dequeued += 1;
        if dequeued > max_nodes {
            tracing::debug!(max_nodes, "spec search budget exhausted, treating as no match");
            return None;
        }

        match visit(&candidate) {
            Visit::Found(spec) => return Some(spec),
            Visit::Descend(next) => queue.extend(next),
            Visit::Skip => {}
        }
    }

    None
}

fn visit(candidate: &Value) -> Visit {
    match candidate {
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(parsed) => Visit::Descend(vec![parsed]),
            Err(_) => {
                // Expected outcome of probing an unknown-shaped value, not
                // an error.
                tracing::trace!("discarding unparseable string candidate");
                Visit::Skip
            }
        },
        Value::Object(object) => {
            if spec_shape(object).is_some() {
                return Visit::Found(repair_spec(object.clone()));
            }

            let mut next = Vec::new();
            for key in WRAPPER_KEYS {
                if let Some(wrapped) = object.get(key) {
                    next.push(wrapped.clone());
                }
            }
            match object.get("json") {
                Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
                    Ok(parsed) => next.push(parsed),
                    Err(_) => tracing::trace!("discarding unparseable `json` key"),
                },
                Some(Value::Object(json_object)) => {
                    next.push(Value::Object(json_object.clone()));
                }
                _ => {}
            }

            if next.is_empty() {
                Visit::Skip
            } else {
                Visit::Descend(next)
            }
        }
        _ => Visit::Skip,
    }
}
