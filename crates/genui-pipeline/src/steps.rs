//! Turn step records
//!
//! The fallback policy inspects which tools ran earlier in the current turn
//! to pick a context-aware placeholder. How steps are recorded and stored is
//! the caller's concern; this module only defines the accessor seam and a
//! plain Vec-backed implementation for harnesses and tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recorded tool invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name as invoked by the model
    pub name: String,

    /// Raw invocation arguments
    #[serde(default)]
    pub arguments: Value,
}

impl ToolCall {
    /// Create a call with no recorded arguments
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Value::Null,
        }
    }

    /// Attach the raw arguments
    #[inline]
    #[must_use]
    pub fn with_arguments(mut self, arguments: Value) -> Self {
        self.arguments = arguments;
        self
    }
}

/// One step of the current turn: the tool calls the model issued in it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Tool calls in issue order
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
}

impl StepRecord {
    /// Create an empty step
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tool call
    #[must_use]
    pub fn with_tool_call(mut self, call: ToolCall) -> Self {
        self.tool_calls.push(call);
        self
    }

    /// Shorthand for a step holding a single named call
    #[must_use]
    pub fn tool(name: impl Into<String>) -> Self {
        Self::new().with_tool_call(ToolCall::new(name))
    }
}

/// Accessor for the ordered step records of the current turn
///
/// Supplied by the calling harness. Queried lazily, only when the policy
/// needs to choose a fallback.
pub trait StepSource {
    /// Steps recorded so far, oldest first
    fn steps(&self) -> Vec<StepRecord>;
}

impl StepSource for Vec<StepRecord> {
    fn steps(&self) -> Vec<StepRecord> {
        self.clone()
    }
}

impl<S: StepSource> StepSource for &S {
    fn steps(&self) -> Vec<StepRecord> {
        (**self).steps()
    }
}

/// Vec-backed step log
#[derive(Debug, Clone, Default)]
pub struct RecordedSteps {
    steps: Vec<StepRecord>,
}

impl RecordedSteps {
    /// Create an empty log
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a step
    pub fn push(&mut self, step: StepRecord) {
        self.steps.push(step);
    }

    /// Chainable [`push`](Self::push)
    #[must_use]
    pub fn with_step(mut self, step: StepRecord) -> Self {
        self.push(step);
        self
    }

    /// Number of recorded steps
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing is recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl StepSource for RecordedSteps {
    fn steps(&self) -> Vec<StepRecord> {
        self.steps.clone()
    }
}
