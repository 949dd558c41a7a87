//! Club use-case service over member and task repositories.
//!
//! # Responsibility
//! - Create members from the member form.
//! - Assemble the dashboard roster, member profiles and the task board.
//! - Provide the assignee candidates for the assignment form.
//!
//! # Invariants
//! - Unknown member ids degrade to `None` / zero stats, never to errors.
//! - The service is storage-agnostic; it only sees repository traits.

use crate::model::assignee::{build_assignee_options, AssigneeOption, DuplicateAssigneeName};
use crate::model::member::{Member, MemberFormError, NewMemberForm, BUILTIN_TEAMS};
use crate::model::task::Task;
use crate::repo::member_repo::MemberRepository;
use crate::repo::next_timestamp_id;
use crate::repo::slot_store::{StoreError, StoreResult};
use crate::repo::task_repo::TaskRepository;
use crate::service::stats::{member_stats, stats_for, tasks_for_member, MemberStats};
use crate::service::task_filter::{filter_tasks, TaskFilter};
use chrono::{DateTime, NaiveDate, Utc};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for club use-cases.
#[derive(Debug)]
pub enum ClubServiceError {
    /// Member form input was rejected.
    Form(MemberFormError),
    /// Team and member display names collide.
    DuplicateAssignee(DuplicateAssigneeName),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for ClubServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form(err) => write!(f, "{err}"),
            Self::DuplicateAssignee(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ClubServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Form(err) => Some(err),
            Self::DuplicateAssignee(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<MemberFormError> for ClubServiceError {
    fn from(value: MemberFormError) -> Self {
        Self::Form(value)
    }
}

impl From<DuplicateAssigneeName> for ClubServiceError {
    fn from(value: DuplicateAssigneeName) -> Self {
        Self::DuplicateAssignee(value)
    }
}

impl From<StoreError> for ClubServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Profile view payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub member: Member,
    /// Tasks naming this member directly, in store order.
    pub tasks: Vec<Task>,
    pub stats: MemberStats,
}

/// One dashboard card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub member: Member,
    pub stats: MemberStats,
}

/// Club service facade over repository implementations.
pub struct ClubService<M: MemberRepository, T: TaskRepository> {
    members: M,
    tasks: T,
}

impl<M: MemberRepository, T: TaskRepository> ClubService<M, T> {
    pub fn new(members: M, tasks: T) -> Self {
        Self { members, tasks }
    }

    /// Task repository, for the assignment form's submit flow.
    pub fn task_repo(&self) -> &T {
        &self.tasks
    }

    /// Validates the form and stores a new member.
    ///
    /// The id is the creation timestamp in epoch milliseconds, bumped past
    /// any numeric id already in use.
    ///
    /// # Errors
    /// - `Form(DuplicateName)` when the normalized name matches a built-in
    ///   team or a listed member. Assignee names must stay unique.
    pub fn create_member(
        &self,
        form: NewMemberForm,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Member, ClubServiceError> {
        if let Err(err) = form.validate() {
            info!("event=member_create module=service status=rejected reason={err:?}");
            return Err(err.into());
        }

        let existing = self.members.list_members()?;
        let name = form.display_name();
        let taken = BUILTIN_TEAMS.contains(&name.as_str())
            || existing.iter().any(|member| member.name == name);
        if taken {
            info!("event=member_create module=service status=rejected reason=DuplicateName");
            return Err(MemberFormError::DuplicateName(name).into());
        }

        let id = next_timestamp_id(
            now.timestamp_millis(),
            existing.iter().filter_map(|member| member.id.parse::<i64>().ok()),
        );
        let member = form.into_member(id.to_string(), today)?;
        self.members.insert_member(&member)?;

        info!(
            "event=member_create module=service status=ok member_id={} team={}",
            member.id, member.team
        );
        Ok(member)
    }

    /// Default roster followed by stored members.
    pub fn list_members(&self) -> StoreResult<Vec<Member>> {
        self.members.list_members()
    }

    pub fn get_member(&self, id: &str) -> StoreResult<Option<Member>> {
        self.members.get_member(id)
    }

    pub fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        self.tasks.list_tasks()
    }

    /// Stats for one member; unknown ids give all zeros.
    pub fn member_stats(&self, id: &str, today: NaiveDate) -> StoreResult<MemberStats> {
        let members = self.members.list_members()?;
        let tasks = self.tasks.list_tasks()?;
        Ok(member_stats(id, &members, &tasks, today))
    }

    /// Member, assigned tasks and stats; `None` for unknown ids.
    pub fn profile(&self, id: &str, today: NaiveDate) -> StoreResult<Option<MemberProfile>> {
        let Some(member) = self.members.get_member(id)? else {
            warn!("event=member_profile module=service status=not_found member_id={id}");
            return Ok(None);
        };

        let all_tasks = self.tasks.list_tasks()?;
        let tasks = tasks_for_member(&member, &all_tasks).cloned().collect();
        let stats = stats_for(&member, &all_tasks, today);
        Ok(Some(MemberProfile {
            member,
            tasks,
            stats,
        }))
    }

    /// Every member with stats, in roster order.
    pub fn roster(&self, today: NaiveDate) -> StoreResult<Vec<RosterEntry>> {
        let tasks = self.tasks.list_tasks()?;
        Ok(self
            .members
            .list_members()?
            .into_iter()
            .map(|member| {
                let stats = stats_for(&member, &tasks, today);
                RosterEntry { member, stats }
            })
            .collect())
    }

    /// Built-in teams followed by every listed member.
    ///
    /// # Errors
    /// - `DuplicateAssignee` when a member shares a name with a team or
    ///   another member.
    pub fn assignee_options(&self) -> Result<Vec<AssigneeOption>, ClubServiceError> {
        let members = self.members.list_members()?;
        Ok(build_assignee_options(BUILTIN_TEAMS, &members)?)
    }

    /// Task board rows for the current search/team filter.
    pub fn task_board(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>> {
        let members = self.members.list_members()?;
        let tasks = self.tasks.list_tasks()?;
        Ok(filter_tasks(&tasks, &members, filter)
            .into_iter()
            .cloned()
            .collect())
    }
}
