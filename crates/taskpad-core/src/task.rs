//! Core task types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Globally unique task identifier (UUID v4).
pub type TaskId = Uuid;

/// A single task list entry.
///
/// Field names serialize as camelCase to match the persisted record format.
/// `created_at` is fixed at creation; `updated_at` is refreshed on every
/// mutation and never precedes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskItem {
    /// Create a fresh active task. Both timestamps start equal.
    pub fn new(text: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new_v4(),
            text: text.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update applied to an existing task.
///
/// `id` and `created_at` are not representable here, so an update can never
/// overwrite them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch that only replaces the text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Patch that only sets the completed flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}

/// View filter over the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn matches(&self, item: &TaskItem) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !item.completed,
            TaskFilter::Completed => item.completed,
        }
    }
}

/// Active/completed totals for list footers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub active: usize,
    pub completed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn new_task_starts_active_with_equal_timestamps() {
        let task = TaskItem::new("buy milk");
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn task_serde_round_trip_uses_camel_case() {
        let task = TaskItem::new("write report");
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));

        let back: TaskItem = serde_json::from_str(&json).unwrap();
        assert_eq!(task, back);
    }

    #[rstest]
    #[case(TaskFilter::All, false, true)]
    #[case(TaskFilter::All, true, true)]
    #[case(TaskFilter::Active, false, true)]
    #[case(TaskFilter::Active, true, false)]
    #[case(TaskFilter::Completed, false, false)]
    #[case(TaskFilter::Completed, true, true)]
    fn filter_matches(#[case] filter: TaskFilter, #[case] completed: bool, #[case] expected: bool) {
        let mut task = TaskItem::new("task");
        task.completed = completed;
        assert_eq!(filter.matches(&task), expected);
    }

    #[test]
    fn patch_constructors_leave_other_fields_unset() {
        let patch = TaskPatch::text("new text");
        assert_eq!(patch.text.as_deref(), Some("new text"));
        assert!(patch.completed.is_none());

        let patch = TaskPatch::completed(true);
        assert!(patch.text.is_none());
        assert_eq!(patch.completed, Some(true));
    }
}
