//! Render-ui tool definition export
//!
//! Builds the function-calling tool definition and the prompt listing the
//! host injects into model requests. Both are derived from the catalog, so
//! registering a component or action updates the surface the model sees
//! without further wiring.

use serde_json::{json, Map, Value};

use genui_catalog::{Catalog, ComponentSpec};

/// Name of the render-ui tool as exposed to the model
pub const RENDER_UI_TOOL_NAME: &str = "render_ui";

/// Tool definition in function-calling format
#[must_use]
pub fn render_ui_tool_definition(catalog: &Catalog) -> Value {
    json!({
        "type": "function",
        "function": {
            "name": RENDER_UI_TOOL_NAME,
            "description": "Render an interactive interface for the user. Produce a render \
                spec: `root` names the top element id, `elements` maps element ids to nodes. \
                Every element has a `type` from the component list, `props`, and `children` \
                (an array of element ids, empty for leaves).",
            "parameters": parameters_schema(catalog),
        }
    })
}

fn parameters_schema(catalog: &Catalog) -> Value {
    json!({
        "type": "object",
        "properties": {
            "root": {
                "type": "string",
                "description": "Id of the root element; must be a key of `elements`"
            },
            "elements": {
                "type": "object",
                "description": "Element id to element node",
                "minProperties": 1,
                "additionalProperties": element_schema(catalog),
            }
        },
        "required": ["root", "elements"]
    })
}

fn element_schema(catalog: &Catalog) -> Value {
    json!({
        "type": "object",
        "properties": {
            "type": {
                "type": "string",
                "enum": catalog.component_names(),
            },
            "props": { "type": "object" },
            "children": { "type": "array", "items": { "type": "string" } },
            "bindings": {
                "type": "object",
                "description": "Prop name to client-state reference"
            }
        },
        "required": ["type"]
    })
}

/// JSON schema of one component's props, derived from its prop table
#[must_use]
pub fn component_props_schema(component: &ComponentSpec) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for prop in component.props() {
        let mut schema = Map::new();
        if let Some(ty) = prop.kind().json_schema_type() {
            schema.insert("type".to_string(), json!(ty));
        }
        if !prop.description().is_empty() {
            schema.insert("description".to_string(), json!(prop.description()));
        }
        properties.insert(prop.name().to_string(), Value::Object(schema));
        if prop.is_required() {
            required.push(prop.name().to_string());
        }
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Prompt section listing the catalog's components and actions
///
/// Injected into the system prompt so the model knows what it may render
/// and which actions element props may reference.
#[must_use]
pub fn catalog_prompt(catalog: &Catalog) -> String {
    let mut prompt = String::from("Components:\n");
    for component in catalog.components() {
        prompt.push_str(&format!(
            "- {}: {}{}{}\n",
            component.name(),
            component.description(),
            if component.allows_children() {
                " [children allowed]"
            } else {
                ""
            },
            prop_summary(" (props: ", component.props()),
        ));
    }

    prompt.push_str("\nActions (referenced from props like `action` or `submitAction`):\n");
    for action in catalog.actions() {
        prompt.push_str(&format!(
            "- {}: {}{}\n",
            action.name(),
            action.description(),
            prop_summary(" (params: ", action.params()),
        ));
    }

    prompt
}

fn prop_summary(prefix: &str, props: &[genui_catalog::PropSpec]) -> String {
    if props.is_empty() {
        return String::new();
    }
    let list = props
        .iter()
        .map(|p| {
            format!(
                "{}{}: {}",
                p.name(),
                if p.is_required() { "" } else { "?" },
                p.kind().name()
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("{prefix}{list})")
}
