//! Render spec data model
//!
//! The canonical shape a model must produce for the render-ui tool:
//! a `root` id plus a map of element id to [`Element`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level render specification
///
/// `elements` is ordered by insertion so serialization round-trips preserve
/// the order the model emitted. Emptiness of `elements` is an invariant
/// enforced at the validation boundary, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSpec {
    /// Id of the tree root; must be a key of `elements`
    pub root: String,

    /// Element id → element node
    pub elements: IndexMap<String, Element>,
}

impl RenderSpec {
    /// Create a spec with the given root id and no elements
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            elements: IndexMap::new(),
        }
    }

    /// Insert an element, replacing any previous entry with the same id
    #[must_use]
    pub fn element(mut self, id: impl Into<String>, element: Element) -> Self {
        self.elements.insert(id.into(), element);
        self
    }

    /// Look up an element by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Element referenced by `root`, if it resolves
    #[inline]
    #[must_use]
    pub fn root_element(&self) -> Option<&Element> {
        self.elements.get(&self.root)
    }

    /// Number of elements
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the spec has no elements
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// One node in the render tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Component type name; must exist in the catalog
    #[serde(rename = "type")]
    pub kind: String,

    /// Property name → value, validated per the component's prop table
    #[serde(default)]
    pub props: Map<String, Value>,

    /// Ordered child element ids; always present after normalization
    #[serde(default)]
    pub children: Vec<String>,

    /// Prop name → dynamic-value reference into client state
    ///
    /// Semantically distinct from `props`. Models frequently misplace this
    /// map inside `props.bindings`; the normalizer relocates it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<Map<String, Value>>,
}

impl Element {
    /// Create an element of the given component type
    #[inline]
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            props: Map::new(),
            children: Vec::new(),
            bindings: None,
        }
    }

    /// Set a prop
    #[must_use]
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Set the ordered child ids
    #[must_use]
    pub fn children(mut self, children: Vec<String>) -> Self {
        self.children = children;
        self
    }

    /// Bind a prop to a dynamic-value reference
    #[must_use]
    pub fn binding(mut self, prop: impl Into<String>, reference: impl Into<Value>) -> Self {
        self.bindings
            .get_or_insert_with(Map::new)
            .insert(prop.into(), reference.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn spec_builder_and_lookup() {
        let spec = RenderSpec::new("main")
            .element("main", Element::new("Card").prop("title", "Hello"));

        assert_eq!(spec.len(), 1);
        assert!(!spec.is_empty());
        assert_eq!(spec.root_element().map(|e| e.kind.as_str()), Some("Card"));
        assert!(spec.get("missing").is_none());
    }

    #[test]
    fn element_serializes_with_type_key() {
        let element = Element::new("Input").prop("placeholder", "Type here");
        let value = serde_json::to_value(&element).expect("serialize");

        assert_eq!(value["type"], "Input");
        assert_eq!(value["props"]["placeholder"], "Type here");
        assert_eq!(value["children"], json!([]));
        assert!(value.get("bindings").is_none());
    }

    #[test]
    fn element_deserializes_with_defaults() {
        let element: Element =
            serde_json::from_value(json!({ "type": "Text" })).expect("deserialize");

        assert_eq!(element.kind, "Text");
        assert!(element.props.is_empty());
        assert!(element.children.is_empty());
        assert!(element.bindings.is_none());
    }

    #[test]
    fn bindings_round_trip() {
        let element = Element::new("Input").binding("value", json!({ "$bindState": "/demo" }));
        let value = serde_json::to_value(&element).expect("serialize");

        assert_eq!(value["bindings"]["value"]["$bindState"], "/demo");

        let back: Element = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, element);
    }

    #[test]
    fn spec_round_trip_preserves_element_order() {
        let spec = RenderSpec::new("stack")
            .element("stack", Element::new("Stack").children(vec!["a".into(), "b".into()]))
            .element("a", Element::new("Text"))
            .element("b", Element::new("Text"));

        let value = serde_json::to_value(&spec).expect("serialize");
        let back: RenderSpec = serde_json::from_value(value).expect("deserialize");

        let ids: Vec<_> = back.elements.keys().cloned().collect();
        assert_eq!(ids, vec!["stack", "a", "b"]);
    }
}
