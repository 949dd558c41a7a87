//! Core domain logic for the club task manager.
//! This crate is the single source of truth for business invariants; page
//! rendering, routing and sign-in live in the UI layer.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::assignee::{build_assignee_options, AssigneeKind, AssigneeOption};
pub use model::member::{Member, MemberFormError, MemberId, NewMemberForm, BUILTIN_TEAMS};
pub use model::route::Route;
pub use model::task::{Priority, Task, TaskDraft, TaskId, TaskStatus};
pub use model::template::{builtin_templates, find_template, TaskTemplate};
pub use repo::member_repo::{MemberRepository, SlotMemberRepository};
pub use repo::slot_store::{
    load_records, save_records, MemorySlotStore, Slot, SlotStore, SqliteSlotStore, StoreError,
    StoreResult,
};
pub use repo::task_repo::{SlotTaskRepository, TaskRepository};
pub use service::assign_service::{AssignTaskForm, DraftPreview, SubmitOutcome};
pub use service::assignees::{filter_options, AssigneeSet};
pub use service::club_service::{ClubService, ClubServiceError, MemberProfile, RosterEntry};
pub use service::deadline::{
    days_remaining, deadline_message, is_urgent, local_today, parse_deadline,
    URGENT_THRESHOLD_DAYS,
};
pub use service::stats::{member_stats, MemberStats};
pub use service::task_filter::{filter_tasks, TaskFilter, TeamFilter};
pub use service::validation::{validate_draft, DraftField, ValidationReport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
