//! GenUI Catalog
//!
//! Declarative catalog of renderable component types and server-invocable
//! actions, plus the validation boundary for model-produced render specs.
//!
//! # Core Concepts
//!
//! - [`RenderSpec`]: the canonical render tree a model must produce
//! - [`ComponentSpec`] / [`ActionSpec`]: data-only catalog entries
//! - [`Catalog`]: registry mapping names to entries
//! - [`SpecValidator`]: composite validator folded from the registry
//!
//! Catalog entries carry no behavior. Registering a new component type never
//! requires touching the normalizer or the fallback policy.
//!
//! # Example
//!
//! ```rust,ignore
//! use genui_catalog::{Catalog, ComponentSpec, PropKind, PropSpec};
//!
//! let mut catalog = Catalog::new();
//! catalog.register(
//!     ComponentSpec::new("Card", "Container with an optional title")
//!         .prop(PropSpec::new("title", PropKind::String))
//!         .accepts_children(),
//! );
//!
//! let spec = catalog.validator().validate(&raw_value)?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod catalog;
mod component;
mod error;
mod props;
mod spec;
mod validator;

// Re-exports
pub use catalog::Catalog;
pub use component::{ActionSpec, ComponentSpec};
pub use error::{SpecRejection, ValidationError};
pub use props::{PropKind, PropSpec};
pub use spec::{Element, RenderSpec};
pub use validator::SpecValidator;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
