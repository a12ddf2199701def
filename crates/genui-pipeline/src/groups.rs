//! Tool group membership
//!
//! Maps the product's data-fetching and mutation tools to the domain group
//! they belong to. The fallback policy checks groups in a fixed priority
//! order: tasks, then time tracking, then calendar, then finance. The order
//! is inherited policy, not a derived invariant.

use crate::steps::StepRecord;

const TASK_TOOLS: &[&str] = &[
    "get_my_tasks",
    "list_project_tasks",
    "search_tasks",
    "create_task",
    "update_task",
    "complete_task",
];

const TIME_TRACKING_TOOLS: &[&str] = &[
    "get_time_entries",
    "get_time_tracking_stats",
    "start_timer",
    "stop_timer",
];

const CALENDAR_TOOLS: &[&str] = &[
    "get_upcoming_events",
    "list_calendar_events",
    "create_event",
];

const FINANCE_TOOLS: &[&str] = &[
    "get_transactions",
    "get_account_summary",
    "log_transaction",
];

/// Domain group of a product tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolGroup {
    /// Task management
    Tasks,

    /// Time tracking
    TimeTracking,

    /// Calendar
    Calendar,

    /// Finance
    Finance,
}

impl ToolGroup {
    /// Fallback priority order
    pub const PRIORITY: [Self; 4] = [
        Self::Tasks,
        Self::TimeTracking,
        Self::Calendar,
        Self::Finance,
    ];

    /// Member tool names
    #[must_use]
    pub fn tools(&self) -> &'static [&'static str] {
        match self {
            Self::Tasks => TASK_TOOLS,
            Self::TimeTracking => TIME_TRACKING_TOOLS,
            Self::Calendar => CALENDAR_TOOLS,
            Self::Finance => FINANCE_TOOLS,
        }
    }

    /// Whether `tool` belongs to this group
    #[inline]
    #[must_use]
    pub fn contains(&self, tool: &str) -> bool {
        self.tools().contains(&tool)
    }

    /// Group of a tool name, if it belongs to any
    #[must_use]
    pub fn of(tool: &str) -> Option<Self> {
        Self::PRIORITY.into_iter().find(|group| group.contains(tool))
    }
}

/// Highest-priority group with any invocation in the given steps
#[must_use]
pub fn detect_context(steps: &[StepRecord]) -> Option<ToolGroup> {
    ToolGroup::PRIORITY.into_iter().find(|group| {
        steps
            .iter()
            .flat_map(|step| &step.tool_calls)
            .any(|call| group.contains(&call.name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_membership() {
        assert!(ToolGroup::Tasks.contains("get_my_tasks"));
        assert!(ToolGroup::TimeTracking.contains("stop_timer"));
        assert!(ToolGroup::Calendar.contains("create_event"));
        assert!(ToolGroup::Finance.contains("log_transaction"));
        assert!(!ToolGroup::Tasks.contains("get_transactions"));
    }

    #[test]
    fn group_of_tool() {
        assert_eq!(ToolGroup::of("get_time_entries"), Some(ToolGroup::TimeTracking));
        assert_eq!(ToolGroup::of("render_ui"), None);
    }

    #[test]
    fn detect_context_empty_steps() {
        assert_eq!(detect_context(&[]), None);
    }

    #[test]
    fn detect_context_single_group() {
        let steps = vec![StepRecord::tool("get_upcoming_events")];
        assert_eq!(detect_context(&steps), Some(ToolGroup::Calendar));
    }

    #[test]
    fn detect_context_prefers_tasks_over_calendar() {
        // Invocation order does not matter; group priority does.
        let steps = vec![
            StepRecord::tool("get_upcoming_events"),
            StepRecord::tool("get_my_tasks"),
        ];
        assert_eq!(detect_context(&steps), Some(ToolGroup::Tasks));
    }

    #[test]
    fn detect_context_ignores_unrelated_tools() {
        let steps = vec![StepRecord::tool("web_search"), StepRecord::tool("get_weather")];
        assert_eq!(detect_context(&steps), None);
    }
}
