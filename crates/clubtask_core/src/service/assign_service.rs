//! Task-assignment form state and submit flow.
//!
//! # Responsibility
//! - Hold the form fields and the assignee picker between interactions.
//! - Derive the live deadline preview on every change.
//! - Gate persistence on draft validation.
//!
//! # Invariants
//! - A rejected submit persists nothing and leaves the form untouched.
//! - A successful submit appends exactly one task and resets the form,
//!   including the assignee selection.

use crate::model::task::{Priority, Task, TaskDraft};
use crate::model::template::TaskTemplate;
use crate::repo::slot_store::StoreResult;
use crate::repo::task_repo::TaskRepository;
use crate::service::assignees::AssigneeSet;
use crate::service::deadline::{
    days_remaining, deadline_message, is_urgent, parse_deadline, DeadlineParseError,
};
use crate::service::validation::{validate_draft, ValidationReport};
use chrono::{DateTime, NaiveDate, Utc};
use log::info;

/// Live assignment form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignTaskForm {
    pub task_name: String,
    pub description: String,
    pub priority: Option<Priority>,
    pub deadline: Option<NaiveDate>,
    pub assignees: AssigneeSet,
}

/// Derived state shown next to the form while editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftPreview {
    pub days_remaining: Option<i64>,
    pub deadline_message: Option<String>,
    pub urgent: bool,
    pub selected_count: usize,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Task),
    Rejected(ValidationReport),
}

impl AssignTaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the deadline from raw input; blank input clears it.
    ///
    /// On parse failure the previous deadline is kept.
    pub fn set_deadline_input(&mut self, input: &str) -> Result<(), DeadlineParseError> {
        if input.trim().is_empty() {
            self.deadline = None;
            return Ok(());
        }
        self.deadline = Some(parse_deadline(input)?);
        Ok(())
    }

    /// Pre-fills name, description and priority from a template.
    ///
    /// Assignees and deadline are left untouched.
    pub fn apply_template(&mut self, template: &TaskTemplate) {
        self.task_name = template.task_name.to_string();
        self.description = template.description.to_string();
        self.priority = Some(template.priority);
    }

    /// Snapshot of the current fields as a draft.
    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            task_name: self.task_name.clone(),
            description: self.description.clone(),
            assigned_to: self.assignees.selected().clone(),
            priority: self.priority,
            deadline: self.deadline,
        }
    }

    pub fn validate(&self, today: NaiveDate) -> ValidationReport {
        validate_draft(&self.draft(), today)
    }

    pub fn preview(&self, today: NaiveDate) -> DraftPreview {
        let days = self
            .deadline
            .map(|deadline| days_remaining(deadline, today));
        DraftPreview {
            days_remaining: days,
            deadline_message: deadline_message(days),
            urgent: days.is_some_and(is_urgent),
            selected_count: self.assignees.len(),
        }
    }

    /// Validates and, when valid, appends one task to `repo`.
    ///
    /// # Errors
    /// - Storage failures from `repo`; the form is not reset in that case.
    pub fn submit<R: TaskRepository + ?Sized>(
        &mut self,
        repo: &R,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> StoreResult<SubmitOutcome> {
        let draft = self.draft();
        let report = validate_draft(&draft, today);
        if !report.is_valid() {
            info!(
                "event=task_submit module=service status=rejected errors={}",
                report.len()
            );
            return Ok(SubmitOutcome::Rejected(report));
        }

        let task = repo.append_task(&draft, now)?;
        self.reset();
        info!(
            "event=task_submit module=service status=ok task_id={} has_deadline={}",
            task.id,
            task.deadline.is_some()
        );
        Ok(SubmitOutcome::Created(task))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
