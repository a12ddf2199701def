//! End-to-end render-ui pipeline
//!
//! What the tool-invocation harness drives: raw model arguments go through
//! the preprocessor (normalize + one-shot fallback), then the catalog's
//! composite validator. One [`RenderUiTool`] per conversation turn.

use serde_json::Value;

use genui_catalog::{Catalog, RenderSpec, SpecRejection};
use genui_normalize::DEFAULT_MAX_SEARCH_NODES;

use crate::policy::RenderUiPreprocessor;
use crate::steps::StepSource;

/// Pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Skip dangling-reference checks on `root` and `children`
    pub permissive_references: bool,

    /// Normalizer search-node budget
    pub max_search_nodes: usize,
}

impl PipelineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With permissive reference checking
    #[inline]
    #[must_use]
    pub fn with_permissive_references(mut self) -> Self {
        self.permissive_references = true;
        self
    }

    /// With a normalizer search-node budget
    #[inline]
    #[must_use]
    pub fn with_search_budget(mut self, max_nodes: usize) -> Self {
        self.max_search_nodes = max_nodes;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            permissive_references: false,
            max_search_nodes: DEFAULT_MAX_SEARCH_NODES,
        }
    }
}

/// Per-turn render-ui tool pipeline
#[derive(Debug)]
pub struct RenderUiTool<S> {
    catalog: Catalog,
    config: PipelineConfig,
    preprocessor: RenderUiPreprocessor<S>,
}

impl<S: StepSource> RenderUiTool<S> {
    /// Create a pipeline with default configuration
    #[must_use]
    pub fn new(catalog: Catalog, steps: S) -> Self {
        Self::with_config(catalog, steps, PipelineConfig::default())
    }

    /// Create a pipeline with explicit configuration
    #[must_use]
    pub fn with_config(catalog: Catalog, steps: S, config: PipelineConfig) -> Self {
        Self {
            catalog,
            config,
            preprocessor: RenderUiPreprocessor::new(steps)
                .with_search_budget(config.max_search_nodes),
        }
    }

    /// Run raw tool-call arguments through preprocess and validation
    ///
    /// # Errors
    /// Returns the [`SpecRejection`] the harness relays back to the model as
    /// corrective feedback. Retry, if any, happens on the model's next
    /// attempt; nothing is retried here.
    pub fn run(&mut self, raw: Value) -> Result<RenderSpec, SpecRejection> {
        let prepared = self.preprocessor.preprocess(raw);

        let mut validator = self.catalog.validator();
        if self.config.permissive_references {
            validator = validator.with_permissive_references();
        }

        match validator.validate(&prepared) {
            Ok(spec) => {
                tracing::debug!(
                    elements = spec.len(),
                    auto_populated = self.preprocessor.was_auto_populated(),
                    "render spec accepted"
                );
                Ok(spec)
            }
            Err(rejection) => {
                tracing::debug!(findings = rejection.len(), "render spec rejected");
                Err(rejection)
            }
        }
    }

    /// Whether the most recent [`run`](Self::run) substituted a fallback
    ///
    /// Queried by the harness after a successful cycle to distinguish
    /// genuine model output from a synthesized placeholder.
    #[inline]
    #[must_use]
    pub fn was_auto_populated(&self) -> bool {
        self.preprocessor.was_auto_populated()
    }

    /// The catalog this pipeline validates against
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
