//! Task draft validation.
//!
//! # Invariants
//! - Every rule is evaluated; a report lists all violated fields at once.
//! - Validation failures are data, never `Err`.
//! - A draft is valid iff its report carries no errors.

use crate::model::task::TaskDraft;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const TASK_NAME_REQUIRED: &str = "Task name is required";
pub const ASSIGNEE_REQUIRED: &str = "Please assign to at least one member or team";
pub const DEADLINE_IN_PAST: &str = "Deadline cannot be in the past";

/// Draft fields that can carry an inline error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    TaskName,
    AssignedTo,
    Deadline,
}

impl DraftField {
    /// Form field key the UI binds the message to.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TaskName => "taskName",
            Self::AssignedTo => "assignedTo",
            Self::Deadline => "deadline",
        }
    }
}

/// Field-keyed validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<DraftField, &'static str>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: DraftField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> impl Iterator<Item = (DraftField, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks a draft against `today` (date-only comparison).
pub fn validate_draft(draft: &TaskDraft, today: NaiveDate) -> ValidationReport {
    let mut errors = BTreeMap::new();

    if draft.task_name.trim().is_empty() {
        errors.insert(DraftField::TaskName, TASK_NAME_REQUIRED);
    }

    if draft.assigned_to.is_empty() {
        errors.insert(DraftField::AssignedTo, ASSIGNEE_REQUIRED);
    }

    if draft.deadline.is_some_and(|deadline| deadline < today) {
        errors.insert(DraftField::Deadline, DEADLINE_IN_PAST);
    }

    ValidationReport { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    fn valid_draft() -> TaskDraft {
        TaskDraft {
            task_name: "Book auditorium".to_string(),
            assigned_to: ["Tech".to_string()].into_iter().collect(),
            ..TaskDraft::default()
        }
    }

    #[test]
    fn blank_names_are_rejected() {
        for name in ["", "   ", "\t\n"] {
            let draft = TaskDraft {
                task_name: name.to_string(),
                ..valid_draft()
            };
            let report = validate_draft(&draft, today());
            assert!(!report.is_valid());
            assert_eq!(report.error(DraftField::TaskName), Some(TASK_NAME_REQUIRED));
        }
    }

    #[test]
    fn all_violations_are_reported_together() {
        let draft = TaskDraft {
            deadline: today().pred_opt(),
            ..TaskDraft::default()
        };
        let report = validate_draft(&draft, today());
        let fields: Vec<_> = report.errors().map(|(field, _)| field.as_str()).collect();
        assert_eq!(fields, ["taskName", "assignedTo", "deadline"]);
    }

    #[test]
    fn deadline_today_or_later_passes() {
        for deadline in [today(), today().succ_opt().unwrap()] {
            let draft = TaskDraft {
                deadline: Some(deadline),
                ..valid_draft()
            };
            assert!(validate_draft(&draft, today()).is_valid());
        }
    }

    #[test]
    fn missing_deadline_is_fine() {
        let report = validate_draft(&valid_draft(), today());
        assert!(report.is_valid());
        assert!(report.is_empty());
    }
}
