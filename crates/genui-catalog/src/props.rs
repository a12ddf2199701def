//! Property schema primitives
//!
//! Schema-as-data building blocks for catalog entries: a property is a name,
//! a basic value kind, a required flag, and a prompting description.

use serde_json::Value;

/// Basic value kind a prop accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    /// JSON string
    String,

    /// JSON number (integer or float)
    Number,

    /// JSON boolean
    Bool,

    /// JSON object
    Object,

    /// JSON array
    Array,

    /// String naming a registered action
    ///
    /// Kind-checks as a string; resolution against the action registry
    /// happens at the validation boundary.
    ActionName,

    /// Any JSON value
    Any,
}

impl PropKind {
    /// Whether `value` matches this kind
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String | Self::ActionName => value.is_string(),
            Self::Number => value.is_number(),
            Self::Bool => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
            Self::Any => true,
        }
    }

    /// Kind name for error messages and schema export
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::ActionName => "action name",
            Self::Any => "any",
        }
    }

    /// Corresponding JSON-schema `type` keyword, if one exists
    #[inline]
    #[must_use]
    pub fn json_schema_type(&self) -> Option<&'static str> {
        match self {
            Self::String | Self::ActionName => Some("string"),
            Self::Number => Some("number"),
            Self::Bool => Some("boolean"),
            Self::Object => Some("object"),
            Self::Array => Some("array"),
            Self::Any => None,
        }
    }
}

/// Kind name of an arbitrary JSON value, for error messages
#[inline]
#[must_use]
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One declared property of a component or action
#[derive(Debug, Clone)]
pub struct PropSpec {
    name: String,
    kind: PropKind,
    required: bool,
    description: String,
}

impl PropSpec {
    /// Create an optional prop of the given kind
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PropKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            description: String::new(),
        }
    }

    /// Mark the prop required
    #[inline]
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a prompting description
    #[inline]
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Prop name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accepted value kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> PropKind {
        self.kind
    }

    /// Whether the prop must be present
    #[inline]
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Prompting description (may be empty)
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_matches_primitives() {
        assert!(PropKind::String.matches(&json!("x")));
        assert!(!PropKind::String.matches(&json!(1)));
        assert!(PropKind::Number.matches(&json!(12)));
        assert!(PropKind::Number.matches(&json!(1.5)));
        assert!(PropKind::Bool.matches(&json!(true)));
        assert!(PropKind::Object.matches(&json!({})));
        assert!(PropKind::Array.matches(&json!([])));
    }

    #[test]
    fn action_name_kind_checks_as_string() {
        assert!(PropKind::ActionName.matches(&json!("create_task")));
        assert!(!PropKind::ActionName.matches(&json!({ "name": "create_task" })));
    }

    #[test]
    fn any_matches_everything() {
        for value in [json!(null), json!(1), json!("s"), json!([1]), json!({})] {
            assert!(PropKind::Any.matches(&value));
        }
    }

    #[test]
    fn prop_spec_builder() {
        let prop = PropSpec::new("title", PropKind::String)
            .required()
            .describe("Card title");

        assert_eq!(prop.name(), "title");
        assert_eq!(prop.kind(), PropKind::String);
        assert!(prop.is_required());
        assert_eq!(prop.description(), "Card title");
    }

    #[test]
    fn value_kind_names() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!([1])), "array");
        assert_eq!(value_kind(&json!("s")), "string");
    }
}
