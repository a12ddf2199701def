//! Element-level structural repair
//!
//! Applied to every element of a matched spec. Fixes the two predictable
//! mistakes models make: nesting the `bindings` map inside `props` instead
//! of at the element top level, and omitting the `children` array.

use serde_json::{Map, Value};

/// Repair every element of a spec-like object and return it as a value
pub(crate) fn repair_spec(mut spec: Map<String, Value>) -> Value {
    if let Some(Value::Object(elements)) = spec.get_mut("elements") {
        for element in elements.values_mut() {
            if let Value::Object(element) = element {
                repair_element(element);
            }
        }
    }
    Value::Object(spec)
}

fn repair_element(element: &mut Map<String, Value>) {
    relocate_bindings(element);
    default_children(element);
}

/// Move a keyed `props.bindings` up to the element top level
///
/// Only when no top-level `bindings` map exists already; an existing one is
/// never overwritten, and a non-object `props.bindings` is left alone for
/// the validator to report.
fn relocate_bindings(element: &mut Map<String, Value>) {
    let top_level_absent = matches!(element.get("bindings"), None | Some(Value::Null));
    if !top_level_absent {
        return;
    }

    let misplaced = match element.get_mut("props") {
        Some(Value::Object(props)) if props.get("bindings").is_some_and(Value::is_object) => {
            props.remove("bindings")
        }
        _ => None,
    };

    if let Some(bindings) = misplaced {
        element.insert("bindings".to_string(), bindings);
    }
}

/// Force `children` to the existing array, or an empty one
fn default_children(element: &mut Map<String, Value>) {
    if !matches!(element.get("children"), Some(Value::Array(_))) {
        element.insert("children".to_string(), Value::Array(Vec::new()));
    }
}
