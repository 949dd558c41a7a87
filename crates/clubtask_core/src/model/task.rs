//! Task drafts and persisted task records.
//!
//! # Invariants
//! - A persisted `Task` is only built from a draft that passed validation.
//! - `assigned_to` holds display names (member or team), never ids.
//! - `status` is never set by the submission flow.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Timestamp-based task identifier (epoch milliseconds, bumped for
/// uniqueness).
pub type TaskId = i64;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Lifecycle marker read by member stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// In-progress task-assignment form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub task_name: String,
    pub description: String,
    pub assigned_to: BTreeSet<String>,
    /// `None` means the user never picked one; persisted as `Medium`.
    pub priority: Option<Priority>,
    pub deadline: Option<NaiveDate>,
}

/// Task record as stored in the `tasks` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub task_name: String,
    #[serde(default)]
    pub description: String,
    pub assigned_to: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Freezes a validated draft into a persisted record.
    ///
    /// The task name is stored trimmed; everything else is copied verbatim.
    pub fn from_draft(id: TaskId, draft: &TaskDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            task_name: draft.task_name.trim().to_string(),
            description: draft.description.clone(),
            assigned_to: draft.assigned_to.iter().cloned().collect(),
            priority: draft.priority.unwrap_or_default(),
            deadline: draft.deadline,
            status: None,
            created_at,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == Some(TaskStatus::Completed)
    }

    pub fn is_assigned_to(&self, name: &str) -> bool {
        self.assigned_to.iter().any(|assignee| assignee == name)
    }
}
