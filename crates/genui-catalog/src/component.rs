//! Catalog entry definitions
//!
//! [`ComponentSpec`] and [`ActionSpec`] are purely declarative data: a name,
//! a prompting description, and a property table. No behavior lives here.

use crate::props::PropSpec;

/// Structural contract of one renderable component type
#[derive(Debug, Clone)]
pub struct ComponentSpec {
    name: String,
    description: String,
    props: Vec<PropSpec>,
    accepts_children: bool,
    deny_unknown_props: bool,
}

impl ComponentSpec {
    /// Create a component with no props and no children
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            props: Vec::new(),
            accepts_children: false,
            deny_unknown_props: false,
        }
    }

    /// Declare a prop
    #[must_use]
    pub fn prop(mut self, prop: PropSpec) -> Self {
        self.props.push(prop);
        self
    }

    /// Allow the component to contain child elements
    #[inline]
    #[must_use]
    pub fn accepts_children(mut self) -> Self {
        self.accepts_children = true;
        self
    }

    /// Reject props not declared in the table
    ///
    /// Off by default: unknown extra keys are tolerated unless a component
    /// opts in to a closed prop set.
    #[inline]
    #[must_use]
    pub fn deny_unknown_props(mut self) -> Self {
        self.deny_unknown_props = true;
        self
    }

    /// Component type name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prompting description
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declared props in declaration order
    #[inline]
    #[must_use]
    pub fn props(&self) -> &[PropSpec] {
        &self.props
    }

    /// Look up a declared prop by name
    #[inline]
    #[must_use]
    pub fn find_prop(&self, name: &str) -> Option<&PropSpec> {
        self.props.iter().find(|p| p.name() == name)
    }

    /// Whether the component may contain children
    #[inline]
    #[must_use]
    pub fn allows_children(&self) -> bool {
        self.accepts_children
    }

    /// Whether undeclared props are rejected
    #[inline]
    #[must_use]
    pub fn rejects_unknown_props(&self) -> bool {
        self.deny_unknown_props
    }
}

/// A named server-invocable effect referenced from element props
///
/// Actions are not part of the render tree. A Button's `action` prop or a
/// Form's `submitAction` prop names one of these.
#[derive(Debug, Clone)]
pub struct ActionSpec {
    name: String,
    description: String,
    params: Vec<PropSpec>,
}

impl ActionSpec {
    /// Create an action with no parameters
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
        }
    }

    /// Declare a parameter
    #[must_use]
    pub fn param(mut self, param: PropSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Action name, unique across the registry
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prompting description
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declared parameters in declaration order
    #[inline]
    #[must_use]
    pub fn params(&self) -> &[PropSpec] {
        &self.params
    }
}
