//! Empty-spec fallback policy
//!
//! A small per-turn state machine. A model that emits a structurally valid
//! spec with zero elements gets one silent repair per turn: the first empty
//! result is replaced with a context-aware placeholder, every later one is
//! passed through so the validation boundary reports it. Repeated
//! substitution was observed to not change model behavior, so the single
//! free attempt is a hard policy.
//!
//! State lives on the instance, one instance per conversation turn. Nothing
//! is shared across turns or requests; concurrent turns construct their own
//! preprocessor.

use serde_json::{Map, Value};

use genui_normalize::{normalize_with_budget, DEFAULT_MAX_SEARCH_NODES};

use crate::fallback::build_context_aware_fallback;
use crate::steps::StepSource;

/// Per-turn render-ui preprocessor
#[derive(Debug)]
pub struct RenderUiPreprocessor<S> {
    steps: S,
    search_budget: usize,
    empty_elements_attempts: u32,
    last_call_auto_populated: bool,
}

impl<S: StepSource> RenderUiPreprocessor<S> {
    /// Create a fresh preprocessor for one turn
    #[must_use]
    pub fn new(steps: S) -> Self {
        Self {
            steps,
            search_budget: DEFAULT_MAX_SEARCH_NODES,
            empty_elements_attempts: 0,
            last_call_auto_populated: false,
        }
    }

    /// Override the normalizer's search-node budget
    #[inline]
    #[must_use]
    pub fn with_search_budget(mut self, max_nodes: usize) -> Self {
        self.search_budget = max_nodes;
        self
    }

    /// Normalize a raw tool-call value and apply the one-shot fallback
    ///
    /// Returns the normalized value, with `root` and `elements` replaced by
    /// a synthesized placeholder iff this is the turn's first empty-elements
    /// result. Other top-level keys survive substitution. Never fails.
    pub fn preprocess(&mut self, value: Value) -> Value {
        self.last_call_auto_populated = false;

        let normalized = normalize_with_budget(value, self.search_budget);

        if !is_empty_elements_spec(&normalized) {
            return normalized;
        }

        self.empty_elements_attempts += 1;
        if self.empty_elements_attempts > 1 {
            // Pass through unmodified; the validator rejects it with the
            // corrective message and the model gets explicit feedback.
            tracing::warn!(
                attempts = self.empty_elements_attempts,
                "repeated empty-elements spec, passing through to validation"
            );
            return normalized;
        }

        tracing::info!("empty-elements spec, substituting context-aware fallback");
        self.last_call_auto_populated = true;
        substitute_fallback(normalized, &self.steps)
    }

    /// Whether the most recent [`preprocess`](Self::preprocess) call
    /// substituted a fallback
    #[inline]
    #[must_use]
    pub fn was_auto_populated(&self) -> bool {
        self.last_call_auto_populated
    }

    /// Empty-elements results seen this turn
    #[inline]
    #[must_use]
    pub fn empty_elements_attempts(&self) -> u32 {
        self.empty_elements_attempts
    }
}

/// Spec-like with zero elements: string `root`, keyed `elements`, no keys
fn is_empty_elements_spec(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        object.get("root").is_some_and(Value::is_string)
            && object
                .get("elements")
                .and_then(Value::as_object)
                .is_some_and(Map::is_empty)
    })
}

fn substitute_fallback<S: StepSource>(normalized: Value, steps: &S) -> Value {
    let (root, elements) = build_context_aware_fallback(&steps.steps());

    let mut object = match normalized {
        Value::Object(object) => object,
        // Unreachable given the emptiness check
        _ => Map::new(),
    };
    object.insert("root".to_string(), Value::String(root.to_string()));
    object.insert("elements".to_string(), elements);
    Value::Object(object)
}
