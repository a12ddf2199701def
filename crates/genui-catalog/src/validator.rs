//! Composite render-spec validator
//!
//! Final gate before a render spec is accepted as a tool-call result. Folds
//! the catalog into one validation routine: structural shape, component and
//! action resolution, prop kinds, child policy, reference integrity, and the
//! non-empty-`elements` refinement.
//!
//! All findings from one pass are collected into a single [`SpecRejection`]
//! rather than failing on the first, so the calling agent loop can relay
//! complete corrective feedback to the model. Nothing here retries; retry is
//! the caller's concern.

use serde_json::{Map, Value};

use crate::catalog::Catalog;
use crate::error::{SpecRejection, ValidationError};
use crate::props::{value_kind, PropKind};
use crate::spec::RenderSpec;

/// Validator folded from a [`Catalog`]
///
/// Obtained via [`Catalog::validator`]. Reference integrity (`root` and
/// `children` entries resolving to keys of `elements`) is checked by default;
/// [`with_permissive_references`](Self::with_permissive_references) restores
/// the permissive behavior of deployments that never checked it.
#[derive(Debug, Clone, Copy)]
pub struct SpecValidator<'a> {
    catalog: &'a Catalog,
    permissive_references: bool,
}

impl<'a> SpecValidator<'a> {
    pub(crate) fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            permissive_references: false,
        }
    }

    /// Skip dangling-reference checks on `root` and `children`
    #[inline]
    #[must_use]
    pub fn with_permissive_references(mut self) -> Self {
        self.permissive_references = true;
        self
    }

    /// Validate a (normalized, possibly fallback-substituted) value
    ///
    /// Prop values of `null` are treated as absent: tolerated for optional
    /// props, reported as missing for required ones.
    ///
    /// # Errors
    /// Returns a [`SpecRejection`] carrying every finding from this pass.
    pub fn validate(&self, value: &Value) -> Result<RenderSpec, SpecRejection> {
        let mut errors = Vec::new();

        let Some(object) = value.as_object() else {
            return Err(SpecRejection::new(vec![ValidationError::NotAnObject]));
        };

        let root = match object.get("root") {
            None => {
                errors.push(ValidationError::MissingField("root"));
                None
            }
            Some(Value::String(root)) if !root.is_empty() => Some(root),
            Some(_) => {
                errors.push(ValidationError::InvalidRoot);
                None
            }
        };

        let elements = match object.get("elements") {
            None => {
                errors.push(ValidationError::MissingField("elements"));
                None
            }
            Some(Value::Object(map)) if map.is_empty() => {
                // The refinement layered on top of the structural schema:
                // an all-fields-type-check spec with zero elements is still
                // rejected, with the fixed corrective message.
                errors.push(ValidationError::EmptyElements);
                None
            }
            Some(Value::Object(map)) => Some(map),
            Some(_) => {
                errors.push(ValidationError::ElementsNotObject);
                None
            }
        };

        if let Some(elements) = elements {
            for (id, element) in elements {
                self.check_element(id, element, elements, &mut errors);
            }

            if !self.permissive_references {
                if let Some(root) = root {
                    if !elements.contains_key(root) {
                        errors.push(ValidationError::DanglingRoot { root: root.clone() });
                    }
                }
            }
        }

        if !errors.is_empty() {
            return Err(SpecRejection::new(errors));
        }

        serde_json::from_value(value.clone())
            .map_err(|e| SpecRejection::new(vec![ValidationError::Malformed(e.to_string())]))
    }

    /// Validate and discard the decoded spec
    ///
    /// # Errors
    /// Same as [`validate`](Self::validate).
    pub fn check(&self, value: &Value) -> Result<(), SpecRejection> {
        self.validate(value).map(|_| ())
    }

    fn check_element(
        &self,
        id: &str,
        value: &Value,
        elements: &Map<String, Value>,
        errors: &mut Vec<ValidationError>,
    ) {
        let Some(element) = value.as_object() else {
            errors.push(ValidationError::ElementNotObject {
                element: id.to_string(),
            });
            return;
        };

        let kind = match element.get("type") {
            Some(Value::String(kind)) => kind,
            _ => {
                errors.push(ValidationError::MissingType {
                    element: id.to_string(),
                });
                return;
            }
        };

        let Some(component) = self.catalog.component(kind) else {
            errors.push(ValidationError::UnknownComponent {
                element: id.to_string(),
                component: kind.clone(),
            });
            return;
        };

        let props = match element.get("props") {
            None => None,
            Some(Value::Object(props)) => Some(props),
            Some(_) => {
                errors.push(ValidationError::PropsNotObject {
                    element: id.to_string(),
                });
                None
            }
        };

        for prop in component.props() {
            match props.and_then(|p| p.get(prop.name())) {
                None | Some(Value::Null) => {
                    if prop.is_required() {
                        errors.push(ValidationError::MissingRequiredProp {
                            element: id.to_string(),
                            prop: prop.name().to_string(),
                        });
                    }
                }
                Some(value) if !prop.kind().matches(value) => {
                    errors.push(ValidationError::PropKindMismatch {
                        element: id.to_string(),
                        prop: prop.name().to_string(),
                        expected: prop.kind().name(),
                        found: value_kind(value),
                    });
                }
                Some(value) => {
                    if prop.kind() == PropKind::ActionName {
                        if let Some(action) = value.as_str() {
                            if self.catalog.action(action).is_none() {
                                errors.push(ValidationError::UnknownAction {
                                    element: id.to_string(),
                                    prop: prop.name().to_string(),
                                    action: action.to_string(),
                                });
                            }
                        }
                    }
                }
            }
        }

        if component.rejects_unknown_props() {
            if let Some(props) = props {
                for key in props.keys() {
                    if component.find_prop(key).is_none() {
                        errors.push(ValidationError::UnknownProp {
                            element: id.to_string(),
                            prop: key.clone(),
                            component: component.name().to_string(),
                        });
                    }
                }
            }
        }

        if let Some(bindings) = element.get("bindings") {
            if !bindings.is_object() && !bindings.is_null() {
                errors.push(ValidationError::BindingsNotObject {
                    element: id.to_string(),
                });
            }
        }

        match element.get("children") {
            None => {}
            Some(Value::Array(children)) => {
                if children.iter().any(|c| !c.is_string()) {
                    errors.push(ValidationError::InvalidChildren {
                        element: id.to_string(),
                    });
                }
                if !children.is_empty() && !component.allows_children() {
                    errors.push(ValidationError::ChildrenNotAllowed {
                        element: id.to_string(),
                        component: component.name().to_string(),
                    });
                }
                if !self.permissive_references {
                    for child in children.iter().filter_map(Value::as_str) {
                        if !elements.contains_key(child) {
                            errors.push(ValidationError::DanglingChild {
                                element: id.to_string(),
                                child: child.to_string(),
                            });
                        }
                    }
                }
            }
            Some(_) => {
                errors.push(ValidationError::InvalidChildren {
                    element: id.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ActionSpec, ComponentSpec};
    use crate::props::PropSpec;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_component(
                ComponentSpec::new("Card", "Container")
                    .prop(PropSpec::new("title", PropKind::String))
                    .accepts_children(),
            )
            .with_component(
                ComponentSpec::new("Stack", "Vertical layout")
                    .prop(PropSpec::new("gap", PropKind::Number))
                    .accepts_children(),
            )
            .with_component(
                ComponentSpec::new("Input", "Text input")
                    .prop(PropSpec::new("placeholder", PropKind::String)),
            )
            .with_component(
                ComponentSpec::new("Button", "Clickable button")
                    .prop(PropSpec::new("label", PropKind::String).required())
                    .prop(PropSpec::new("action", PropKind::ActionName))
                    .deny_unknown_props(),
            )
            .with_action(ActionSpec::new("create_task", "Create a task"))
    }

    fn errors_of(value: &Value) -> Vec<ValidationError> {
        catalog()
            .validator()
            .validate(value)
            .expect_err("expected rejection")
            .errors()
            .to_vec()
    }

    #[test]
    fn accepts_minimal_spec() {
        let value = json!({
            "root": "r",
            "elements": { "r": { "type": "Card", "props": { "title": "Hello" } } }
        });

        let spec = catalog().validator().validate(&value).expect("accepted");
        assert_eq!(spec.root, "r");
        assert_eq!(spec.get("r").map(|e| e.kind.as_str()), Some("Card"));
    }

    #[test]
    fn rejects_non_object() {
        let errors = errors_of(&json!("not a spec"));
        assert_eq!(errors, vec![ValidationError::NotAnObject]);
    }

    #[test]
    fn rejects_missing_fields() {
        let errors = errors_of(&json!({}));
        assert!(errors.contains(&ValidationError::MissingField("root")));
        assert!(errors.contains(&ValidationError::MissingField("elements")));
    }

    #[test]
    fn rejects_empty_elements_with_elements_path() {
        // Structurally valid except for the refinement: every field
        // individually type-checks.
        let errors = errors_of(&json!({ "root": "x", "elements": {} }));

        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_empty_elements());
        assert_eq!(errors[0].path(), "elements");
    }

    #[test]
    fn rejects_unknown_component_naming_type_and_element() {
        let errors = errors_of(&json!({
            "root": "r",
            "elements": { "r": { "type": "Carousel" } }
        }));

        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::UnknownComponent { element, component }
                if element == "r" && component == "Carousel"
        )));
    }

    #[test]
    fn rejects_missing_required_prop() {
        let errors = errors_of(&json!({
            "root": "b",
            "elements": { "b": { "type": "Button", "props": { "action": "create_task" } } }
        }));

        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::MissingRequiredProp { element, prop }
                if element == "b" && prop == "label"
        )));
    }

    #[test]
    fn null_prop_counts_as_absent() {
        let value = json!({
            "root": "i",
            "elements": { "i": { "type": "Input", "props": { "placeholder": null } } }
        });
        assert!(catalog().validator().check(&value).is_ok());

        let errors = errors_of(&json!({
            "root": "b",
            "elements": { "b": { "type": "Button", "props": { "label": null } } }
        }));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::MissingRequiredProp { .. })));
    }

    #[test]
    fn rejects_prop_kind_mismatch() {
        let errors = errors_of(&json!({
            "root": "s",
            "elements": { "s": { "type": "Stack", "props": { "gap": "12" } } }
        }));

        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::PropKindMismatch { prop, expected: "number", found: "string", .. }
                if prop == "gap"
        )));
    }

    #[test]
    fn tolerates_unknown_props_by_default() {
        let value = json!({
            "root": "r",
            "elements": { "r": { "type": "Card", "props": { "title": "x", "elevation": 2 } } }
        });
        assert!(catalog().validator().check(&value).is_ok());
    }

    #[test]
    fn rejects_unknown_props_on_closed_components() {
        let errors = errors_of(&json!({
            "root": "b",
            "elements": { "b": { "type": "Button", "props": { "label": "Go", "color": "red" } } }
        }));

        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::UnknownProp { prop, component, .. }
                if prop == "color" && component == "Button"
        )));
    }

    #[test]
    fn rejects_unknown_action_reference() {
        let errors = errors_of(&json!({
            "root": "b",
            "elements": { "b": { "type": "Button", "props": { "label": "Go", "action": "launch_rocket" } } }
        }));

        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::UnknownAction { action, .. } if action == "launch_rocket"
        )));
    }

    #[test]
    fn rejects_children_on_childless_component() {
        let errors = errors_of(&json!({
            "root": "i",
            "elements": {
                "i": { "type": "Input", "children": ["x"] },
                "x": { "type": "Input" }
            }
        }));

        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::ChildrenNotAllowed { component, .. } if component == "Input"
        )));
    }

    #[test]
    fn empty_children_always_allowed() {
        let value = json!({
            "root": "i",
            "elements": { "i": { "type": "Input", "children": [] } }
        });
        assert!(catalog().validator().check(&value).is_ok());
    }

    #[test]
    fn rejects_dangling_root_and_child() {
        let errors = errors_of(&json!({
            "root": "ghost",
            "elements": { "s": { "type": "Stack", "children": ["phantom"] } }
        }));

        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::DanglingRoot { root } if root == "ghost")));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::DanglingChild { child, .. } if child == "phantom")));
    }

    #[test]
    fn permissive_mode_skips_reference_checks() {
        let value = json!({
            "root": "ghost",
            "elements": { "s": { "type": "Stack", "children": ["phantom"] } }
        });

        let catalog = catalog();
        let validator = catalog.validator().with_permissive_references();
        assert!(validator.check(&value).is_ok());
    }

    #[test]
    fn rejects_malformed_children_value() {
        let errors = errors_of(&json!({
            "root": "s",
            "elements": { "s": { "type": "Stack", "children": "a,b" } }
        }));

        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidChildren { .. })));
    }
}
