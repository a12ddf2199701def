//! Validation error taxonomy
//!
//! Structured, path-qualified errors produced by the validation boundary.
//! These are relayed back to the model as corrective tool-call feedback, so
//! messages name the offending element, prop, or reference.

use std::fmt;

/// Fixed corrective message for the empty-`elements` refinement
///
/// Emitted verbatim so the model gets the exact required shape on retry.
pub(crate) const EMPTY_ELEMENTS_MESSAGE: &str = "elements must not be empty: \
provide at least one element keyed by id and point `root` at it, e.g. \
{\"root\":\"main\",\"elements\":{\"main\":{\"type\":\"Card\",\"props\":{\"title\":\"...\"},\"children\":[]}}}";

/// One validation finding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Input is not a JSON object at all
    #[error("render spec must be a JSON object with `root` and `elements`")]
    NotAnObject,

    /// A required top-level field is missing
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// `root` is present but not a non-empty string
    #[error("`root` must be a non-empty string naming an element id")]
    InvalidRoot,

    /// `elements` is present but not an object
    #[error("`elements` must be an object keyed by element id")]
    ElementsNotObject,

    /// `elements` is present but has zero entries
    #[error("{}", EMPTY_ELEMENTS_MESSAGE)]
    EmptyElements,

    /// An element value is not an object
    #[error("element `{element}` must be an object")]
    ElementNotObject { element: String },

    /// An element has no usable `type` field
    #[error("element `{element}` is missing a string `type`")]
    MissingType { element: String },

    /// An element names a component type absent from the catalog
    #[error("unknown component type `{component}` in element `{element}`")]
    UnknownComponent { element: String, component: String },

    /// `props` is present but not an object
    #[error("element `{element}`: `props` must be an object")]
    PropsNotObject { element: String },

    /// A declared required prop is absent
    #[error("element `{element}`: missing required prop `{prop}`")]
    MissingRequiredProp { element: String, prop: String },

    /// A prop value has the wrong kind
    #[error("element `{element}`: prop `{prop}` expects {expected}, got {found}")]
    PropKindMismatch {
        element: String,
        prop: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A prop not in the component's closed prop set
    #[error("element `{element}`: prop `{prop}` is not accepted by component `{component}`")]
    UnknownProp {
        element: String,
        prop: String,
        component: String,
    },

    /// An `ActionName` prop names an unregistered action
    #[error("element `{element}`: prop `{prop}` references unknown action `{action}`")]
    UnknownAction {
        element: String,
        prop: String,
        action: String,
    },

    /// `children` is present but not an array of element ids
    #[error("element `{element}`: `children` must be an array of element ids")]
    InvalidChildren { element: String },

    /// A component with children that does not accept any
    #[error("element `{element}`: component `{component}` does not accept children")]
    ChildrenNotAllowed { element: String, component: String },

    /// `bindings` is present but not an object
    #[error("element `{element}`: `bindings` must be an object mapping prop names to references")]
    BindingsNotObject { element: String },

    /// `root` names an id absent from `elements`
    #[error("`root` references missing element `{root}`")]
    DanglingRoot { root: String },

    /// A `children` entry names an id absent from `elements`
    #[error("element `{element}`: child `{child}` references a missing element")]
    DanglingChild { element: String, child: String },

    /// Structural checks passed but the spec failed to decode
    #[error("malformed render spec: {0}")]
    Malformed(String),
}

impl ValidationError {
    /// Path of the failing field, dot-qualified from the spec root
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::NotAnObject | Self::Malformed(_) => String::new(),
            Self::MissingField(field) => (*field).to_string(),
            Self::InvalidRoot | Self::DanglingRoot { .. } => "root".to_string(),
            Self::ElementsNotObject | Self::EmptyElements => "elements".to_string(),
            Self::ElementNotObject { element }
            | Self::UnknownComponent { element, .. }
            | Self::MissingType { element } => format!("elements.{element}"),
            Self::PropsNotObject { element } => format!("elements.{element}.props"),
            Self::MissingRequiredProp { element, prop }
            | Self::PropKindMismatch { element, prop, .. }
            | Self::UnknownProp { element, prop, .. }
            | Self::UnknownAction { element, prop, .. } => {
                format!("elements.{element}.props.{prop}")
            }
            Self::InvalidChildren { element }
            | Self::ChildrenNotAllowed { element, .. }
            | Self::DanglingChild { element, .. } => format!("elements.{element}.children"),
            Self::BindingsNotObject { element } => format!("elements.{element}.bindings"),
        }
    }

    /// Whether this is the empty-`elements` refinement failure
    #[inline]
    #[must_use]
    pub fn is_empty_elements(&self) -> bool {
        matches!(self, Self::EmptyElements)
    }
}

/// Rejection of a render spec: every finding from one validation pass
///
/// All findings are collected in one pass so the model gets complete
/// feedback on its next attempt instead of one error per retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRejection {
    errors: Vec<ValidationError>,
}

impl SpecRejection {
    /// Create from collected findings
    ///
    /// Callers guarantee at least one finding; an empty rejection would mean
    /// validation actually succeeded.
    #[inline]
    #[must_use]
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// All findings in detection order
    #[inline]
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// First finding
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Number of findings
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the rejection carries no findings
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any finding is the empty-`elements` refinement failure
    #[must_use]
    pub fn has_empty_elements(&self) -> bool {
        self.errors.iter().any(ValidationError::is_empty_elements)
    }

    /// Multi-line `path: message` feedback suitable for relay to the model
    #[must_use]
    pub fn feedback(&self) -> String {
        self.errors
            .iter()
            .map(|e| {
                let path = e.path();
                if path.is_empty() {
                    e.to_string()
                } else {
                    format!("{path}: {e}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for SpecRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "render spec rejected ({} finding{}): {}",
            self.errors.len(),
            if self.errors.len() == 1 { "" } else { "s" },
            self.feedback().replace('\n', "; "),
        )
    }
}

impl std::error::Error for SpecRejection {}
