//! Component and action registry
//!
//! Single source of truth mapping component-type names and action names to
//! their declarative contracts. Folding the registry into a composite
//! validator happens in [`crate::validator`]; the registry itself is pure
//! lookup.

use indexmap::IndexMap;

use crate::component::{ActionSpec, ComponentSpec};
use crate::validator::SpecValidator;

/// Registry of component types and actions
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    components: IndexMap<String, ComponentSpec>,
    actions: IndexMap<String, ActionSpec>,
}

impl Catalog {
    /// Create an empty catalog
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component type, replacing any previous entry with the
    /// same name
    pub fn register(&mut self, component: ComponentSpec) {
        self.components
            .insert(component.name().to_string(), component);
    }

    /// Register an action, replacing any previous entry with the same name
    pub fn register_action(&mut self, action: ActionSpec) {
        self.actions.insert(action.name().to_string(), action);
    }

    /// Chainable [`register`](Self::register)
    #[must_use]
    pub fn with_component(mut self, component: ComponentSpec) -> Self {
        self.register(component);
        self
    }

    /// Chainable [`register_action`](Self::register_action)
    #[must_use]
    pub fn with_action(mut self, action: ActionSpec) -> Self {
        self.register_action(action);
        self
    }

    /// Look up a component type by name
    #[inline]
    #[must_use]
    pub fn component(&self, name: &str) -> Option<&ComponentSpec> {
        self.components.get(name)
    }

    /// Look up an action by name
    #[inline]
    #[must_use]
    pub fn action(&self, name: &str) -> Option<&ActionSpec> {
        self.actions.get(name)
    }

    /// Registered component type names in registration order
    #[must_use]
    pub fn component_names(&self) -> Vec<&str> {
        self.components.keys().map(String::as_str).collect()
    }

    /// Registered action names in registration order
    #[must_use]
    pub fn action_names(&self) -> Vec<&str> {
        self.actions.keys().map(String::as_str).collect()
    }

    /// Iterate over registered components
    pub fn components(&self) -> impl Iterator<Item = &ComponentSpec> {
        self.components.values()
    }

    /// Iterate over registered actions
    pub fn actions(&self) -> impl Iterator<Item = &ActionSpec> {
        self.actions.values()
    }

    /// Number of registered component types
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no component types are registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Fold the registry into a composite render-spec validator
    ///
    /// The returned validator performs the structural pass plus the
    /// non-empty-`elements` refinement. The refinement is layered on top of
    /// the structural checks so normalization and fallback substitution can
    /// run before emptiness is enforced.
    #[inline]
    #[must_use]
    pub fn validator(&self) -> SpecValidator<'_> {
        SpecValidator::new(self)
    }
}
