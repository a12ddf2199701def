//! GenUI Pipeline
//!
//! The per-turn half of the generative-UI subsystem:
//! - [`RenderUiPreprocessor`]: normalization plus the one-shot empty-spec
//!   fallback, with per-turn state held on the instance
//! - [`RenderUiTool`]: the harness-facing preprocess-then-validate pipeline
//! - [`builtin::workspace_catalog`]: the product's component/action set
//! - [`tool_def`]: the tool definition and prompt listing derived from a
//!   catalog
//!
//! # Example
//!
//! ```rust,ignore
//! use genui_pipeline::{builtin::workspace_catalog, RecordedSteps, RenderUiTool, StepRecord};
//!
//! // One pipeline per conversation turn.
//! let steps = RecordedSteps::new().with_step(StepRecord::tool("get_my_tasks"));
//! let mut tool = RenderUiTool::new(workspace_catalog(), steps);
//!
//! match tool.run(raw_model_arguments) {
//!     Ok(spec) => render(spec, tool.was_auto_populated()),
//!     Err(rejection) => relay_feedback(rejection.feedback()),
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod builtin;
mod fallback;
mod groups;
mod pipeline;
mod policy;
mod steps;
pub mod tool_def;

// Re-exports for convenience
pub use fallback::{
    CALENDAR_FALLBACK_ID, FINANCE_FALLBACK_ID, GENERIC_FALLBACK_ID, TASKS_FALLBACK_ID,
    TIME_FALLBACK_ID,
};
pub use groups::{detect_context, ToolGroup};
pub use pipeline::{PipelineConfig, RenderUiTool};
pub use policy::RenderUiPreprocessor;
pub use steps::{RecordedSteps, StepRecord, StepSource, ToolCall};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
