//! GenUI Normalize
//!
//! Transforms an arbitrary, possibly malformed, possibly wrapped value
//! produced by a language model into the canonical render-spec shape, or
//! returns the input unchanged when nothing spec-like can be found.
//!
//! The search is a breadth-first walk over the untyped value: JSON-encoded
//! strings are parsed and re-enqueued, known wrapper keys are descended
//! into, and the first spec-like candidate wins. Found specs get their
//! elements repaired in place: a `bindings` map misplaced inside `props` is
//! relocated to the element top level, and `children` is defaulted to an
//! empty array.
//!
//! Normalization is total and idempotent: it never fails, and
//! `normalize(normalize(x)) == normalize(x)` for every input. Truly unusable
//! input flows through unchanged so the downstream validation boundary stays
//! the single place that reports errors.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod repair;
mod search;

pub use search::{is_spec_like, normalize, normalize_with_budget, DEFAULT_MAX_SEARCH_NODES};
