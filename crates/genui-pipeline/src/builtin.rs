//! Built-in workspace catalog
//!
//! The component and action set of the workspace assistant: layout and
//! content primitives, form inputs, and the domain widgets (tasks, time
//! tracking) the fallback policy synthesizes. Entries are declarative data;
//! hosts can extend the returned catalog or build their own from scratch.

use genui_catalog::{ActionSpec, Catalog, ComponentSpec, PropKind, PropSpec};
use once_cell::sync::Lazy;

static WORKSPACE_CATALOG: Lazy<Catalog> = Lazy::new(build_workspace_catalog);

/// Catalog of the workspace assistant's components and actions
///
/// Built once, on first use.
#[must_use]
pub fn workspace_catalog() -> Catalog {
    WORKSPACE_CATALOG.clone()
}

fn build_workspace_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    // Layout
    catalog.register(
        ComponentSpec::new("Stack", "Vertical layout container, stacks children top to bottom")
            .prop(PropSpec::new("gap", PropKind::Number).describe("Spacing between children, px"))
            .prop(PropSpec::new("align", PropKind::String).describe("start | center | end | stretch"))
            .accepts_children(),
    );
    catalog.register(
        ComponentSpec::new("Row", "Horizontal layout container, arranges children left to right")
            .prop(PropSpec::new("gap", PropKind::Number).describe("Spacing between children, px"))
            .prop(PropSpec::new("align", PropKind::String).describe("start | center | end | stretch"))
            .accepts_children(),
    );
    catalog.register(
        ComponentSpec::new("Card", "Styled container with an optional title")
            .prop(PropSpec::new("title", PropKind::String).describe("Card heading"))
            .prop(PropSpec::new("subtitle", PropKind::String).describe("Secondary heading"))
            .accepts_children(),
    );
    catalog.register(ComponentSpec::new("Divider", "Horizontal rule between sections"));

    // Content
    catalog.register(
        ComponentSpec::new("Text", "Plain text block")
            .prop(PropSpec::new("text", PropKind::String).required().describe("Text to display"))
            .prop(PropSpec::new("tone", PropKind::String).describe("default | muted | danger")),
    );
    catalog.register(
        ComponentSpec::new("Heading", "Section heading")
            .prop(PropSpec::new("text", PropKind::String).required().describe("Heading text"))
            .prop(PropSpec::new("level", PropKind::Number).describe("1-4, largest first")),
    );
    catalog.register(
        ComponentSpec::new("Badge", "Small status label")
            .prop(PropSpec::new("label", PropKind::String).required().describe("Badge text"))
            .prop(PropSpec::new("tone", PropKind::String).describe("neutral | success | warning")),
    );
    catalog.register(
        ComponentSpec::new("Callout", "Highlighted notice box")
            .prop(PropSpec::new("variant", PropKind::String).describe("info | warning | error"))
            .prop(PropSpec::new("title", PropKind::String).describe("Notice heading"))
            .prop(PropSpec::new("text", PropKind::String).required().describe("Notice body")),
    );

    // Inputs
    catalog.register(
        ComponentSpec::new("Input", "Single-line text input")
            .prop(PropSpec::new("label", PropKind::String).describe("Field label"))
            .prop(PropSpec::new("placeholder", PropKind::String).describe("Hint shown when empty")),
    );
    catalog.register(
        ComponentSpec::new("Textarea", "Multi-line text input")
            .prop(PropSpec::new("label", PropKind::String).describe("Field label"))
            .prop(PropSpec::new("placeholder", PropKind::String).describe("Hint shown when empty"))
            .prop(PropSpec::new("rows", PropKind::Number).describe("Visible rows")),
    );
    catalog.register(
        ComponentSpec::new("Select", "Dropdown selection")
            .prop(PropSpec::new("label", PropKind::String).describe("Field label"))
            .prop(PropSpec::new("options", PropKind::Array).required().describe("Choices, in order")),
    );
    catalog.register(
        ComponentSpec::new("Checkbox", "Boolean toggle")
            .prop(PropSpec::new("label", PropKind::String).required().describe("Label next to the box")),
    );
    catalog.register(
        ComponentSpec::new("Button", "Clickable button that triggers an action")
            .prop(PropSpec::new("label", PropKind::String).required().describe("Button text"))
            .prop(PropSpec::new("action", PropKind::ActionName).describe("Action triggered on click"))
            .prop(PropSpec::new("variant", PropKind::String).describe("primary | secondary | danger")),
    );
    catalog.register(
        ComponentSpec::new("Form", "Groups inputs and submits them through an action")
            .prop(PropSpec::new("title", PropKind::String).describe("Form heading"))
            .prop(PropSpec::new("submitAction", PropKind::ActionName).describe("Action invoked on submit"))
            .accepts_children(),
    );

    // Data
    catalog.register(
        ComponentSpec::new("Table", "Tabular data")
            .prop(PropSpec::new("columns", PropKind::Array).required().describe("Column headers"))
            .prop(PropSpec::new("rows", PropKind::Array).required().describe("Row cells, one array per row")),
    );
    catalog.register(
        ComponentSpec::new("Stat", "Single key figure")
            .prop(PropSpec::new("label", PropKind::String).required().describe("What the figure measures"))
            .prop(PropSpec::new("value", PropKind::Any).required().describe("The figure"))
            .prop(PropSpec::new("unit", PropKind::String).describe("Unit suffix")),
    );

    // Domain widgets
    catalog.register(
        ComponentSpec::new("MyTasks", "The user's task list, fetched client-side")
            .prop(PropSpec::new("title", PropKind::String).describe("Widget heading"))
            .prop(PropSpec::new("filter", PropKind::String).describe("all | today | overdue"))
            .prop(PropSpec::new("limit", PropKind::Number).describe("Max tasks shown")),
    );
    catalog.register(
        ComponentSpec::new("TimeTrackingStats", "Aggregated time-tracking figures, fetched client-side")
            .prop(PropSpec::new("title", PropKind::String).describe("Widget heading"))
            .prop(PropSpec::new("period", PropKind::String).describe("day | week | month")),
    );

    // Actions
    catalog.register_action(
        ActionSpec::new("create_task", "Create a task")
            .param(PropSpec::new("title", PropKind::String).required().describe("Task title"))
            .param(PropSpec::new("description", PropKind::String).describe("Task details"))
            .param(PropSpec::new("due_date", PropKind::String).describe("ISO date")),
    );
    catalog.register_action(
        ActionSpec::new("complete_task", "Mark a task completed")
            .param(PropSpec::new("task_id", PropKind::String).required().describe("Task to complete")),
    );
    catalog.register_action(
        ActionSpec::new("start_timer", "Start a time-tracking timer")
            .param(PropSpec::new("task_id", PropKind::String).describe("Task to track"))
            .param(PropSpec::new("label", PropKind::String).describe("Free-form timer label")),
    );
    catalog.register_action(ActionSpec::new("stop_timer", "Stop the running timer"));
    catalog.register_action(
        ActionSpec::new("log_transaction", "Record a finance transaction")
            .param(PropSpec::new("amount", PropKind::Number).required().describe("Signed amount"))
            .param(PropSpec::new("category", PropKind::String).describe("Budget category"))
            .param(PropSpec::new("note", PropKind::String).describe("Free-form note")),
    );
    catalog.register_action(
        ActionSpec::new("create_event", "Create a calendar event")
            .param(PropSpec::new("title", PropKind::String).required().describe("Event title"))
            .param(PropSpec::new("start", PropKind::String).required().describe("ISO start time"))
            .param(PropSpec::new("end", PropKind::String).describe("ISO end time")),
    );
    catalog.register_action(
        ActionSpec::new("submit_form", "Submit the values of the enclosing form")
            .param(PropSpec::new("form_id", PropKind::String).describe("Form element id")),
    );

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn catalog_has_core_components() {
        let catalog = workspace_catalog();
        for name in ["Stack", "Card", "Text", "Input", "Button", "MyTasks", "TimeTrackingStats"] {
            assert!(catalog.component(name).is_some(), "missing `{name}`");
        }
    }

    #[test]
    fn layout_components_accept_children() {
        let catalog = workspace_catalog();
        for name in ["Stack", "Row", "Card", "Form"] {
            assert!(catalog.component(name).expect(name).allows_children());
        }
        assert!(!catalog.component("Text").expect("Text").allows_children());
    }

    #[test]
    fn catalog_has_product_actions() {
        let catalog = workspace_catalog();
        for name in ["create_task", "stop_timer", "log_transaction", "submit_form"] {
            assert!(catalog.action(name).is_some(), "missing `{name}`");
        }
    }

    #[test]
    fn button_action_prop_resolves_against_registry() {
        let catalog = workspace_catalog();
        let value = json!({
            "root": "b",
            "elements": {
                "b": { "type": "Button", "props": { "label": "Add", "action": "create_task" } }
            }
        });
        assert!(catalog.validator().check(&value).is_ok());
    }

    #[test]
    fn every_fallback_spec_validates() {
        use crate::fallback::build_context_aware_fallback;
        use crate::steps::StepRecord;

        let catalog = workspace_catalog();
        let contexts: Vec<Vec<StepRecord>> = vec![
            vec![],
            vec![StepRecord::tool("get_my_tasks")],
            vec![StepRecord::tool("get_time_entries")],
            vec![StepRecord::tool("get_upcoming_events")],
            vec![StepRecord::tool("get_transactions")],
        ];

        for steps in contexts {
            let (root, elements) = build_context_aware_fallback(&steps);
            let value = json!({ "root": root, "elements": elements });
            catalog
                .validator()
                .validate(&value)
                .unwrap_or_else(|rejection| panic!("fallback `{root}` rejected: {rejection}"));
        }
    }
}
