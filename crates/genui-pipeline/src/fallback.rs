//! Context-aware fallback specs
//!
//! Synthesized when a turn's first normalized spec arrives with zero
//! elements. The placeholder is chosen from the tool groups invoked earlier
//! in the turn so the user sees something related to what the assistant was
//! actually doing, or a generic notice when nothing matches.
//!
//! Every synthesized element carries an explicit `children` array and only
//! props declared in the built-in catalog, so a substituted spec always
//! passes the validation boundary.

use serde_json::{json, Value};

use crate::groups::{detect_context, ToolGroup};
use crate::steps::StepRecord;

/// Root id of the tasks-summary fallback
pub const TASKS_FALLBACK_ID: &str = "tasks_summary";

/// Root id of the time-tracking fallback
pub const TIME_FALLBACK_ID: &str = "time_stats";

/// Root id of the calendar fallback
pub const CALENDAR_FALLBACK_ID: &str = "calendar_card";

/// Root id of the finance fallback
pub const FINANCE_FALLBACK_ID: &str = "finance_card";

/// Root id of the generic fallback
pub const GENERIC_FALLBACK_ID: &str = "fallback_notice";

/// Build the replacement `root` and `elements` for an empty spec
///
/// Checks tool groups in fixed priority order (tasks, time tracking,
/// calendar, finance) and falls through to a generic explanatory callout.
#[must_use]
pub(crate) fn build_context_aware_fallback(steps: &[StepRecord]) -> (&'static str, Value) {
    match detect_context(steps) {
        Some(ToolGroup::Tasks) => (
            TASKS_FALLBACK_ID,
            json!({
                TASKS_FALLBACK_ID: {
                    "type": "MyTasks",
                    "props": { "title": "Your tasks" },
                    "children": []
                }
            }),
        ),
        Some(ToolGroup::TimeTracking) => (
            TIME_FALLBACK_ID,
            json!({
                TIME_FALLBACK_ID: {
                    "type": "TimeTrackingStats",
                    "props": { "title": "Time tracked" },
                    "children": []
                }
            }),
        ),
        Some(ToolGroup::Calendar) => (
            CALENDAR_FALLBACK_ID,
            json!({
                CALENDAR_FALLBACK_ID: {
                    "type": "Card",
                    "props": { "title": "Upcoming events" },
                    "children": ["calendar_note"]
                },
                "calendar_note": {
                    "type": "Text",
                    "props": {
                        "text": "Your calendar data was fetched, but the interface for it could not be generated. Ask again to see your upcoming events laid out here."
                    },
                    "children": []
                }
            }),
        ),
        Some(ToolGroup::Finance) => (
            FINANCE_FALLBACK_ID,
            json!({
                FINANCE_FALLBACK_ID: {
                    "type": "Card",
                    "props": { "title": "Finance overview" },
                    "children": ["finance_note"]
                },
                "finance_note": {
                    "type": "Text",
                    "props": {
                        "text": "Your finance data was fetched, but the interface for it could not be generated. Ask again to see your transactions and balances laid out here."
                    },
                    "children": []
                }
            }),
        ),
        None => (
            GENERIC_FALLBACK_ID,
            json!({
                GENERIC_FALLBACK_ID: {
                    "type": "Callout",
                    "props": {
                        "variant": "warning",
                        "title": "Interface could not be generated",
                        "text": "The generated interface specification was incomplete. Please try asking again, or rephrase your request."
                    },
                    "children": []
                }
            }),
        ),
    }
}
