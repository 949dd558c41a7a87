//! Selectable assignment targets (teams and individual members).
//!
//! # Invariants
//! - Display names are unique across the combined option list; the selection
//!   set stores names only and cannot tell a team from a member.

use crate::model::member::Member;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssigneeKind {
    Team,
    Member,
}

impl AssigneeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::Member => "member",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeOption {
    pub id: String,
    pub name: String,
    pub kind: AssigneeKind,
}

impl AssigneeOption {
    pub fn team(name: &str) -> Self {
        Self {
            id: format!("team-{}", name.to_lowercase()),
            name: name.to_string(),
            kind: AssigneeKind::Team,
        }
    }

    pub fn member(member: &Member) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            kind: AssigneeKind::Member,
        }
    }

    /// Case-insensitive substring match; `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}

/// Raised when a team and a member (or two members) share a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateAssigneeName(pub String);

impl Display for DuplicateAssigneeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "assignee name `{}` is not unique", self.0)
    }
}

impl Error for DuplicateAssigneeName {}

/// Builds the candidate universe: teams first, then members, input order
/// preserved within each group.
pub fn build_assignee_options(
    teams: &[&str],
    members: &[Member],
) -> Result<Vec<AssigneeOption>, DuplicateAssigneeName> {
    let options: Vec<AssigneeOption> = teams
        .iter()
        .map(|team| AssigneeOption::team(team))
        .chain(members.iter().map(AssigneeOption::member))
        .collect();

    let mut seen = HashSet::with_capacity(options.len());
    for option in &options {
        if !seen.insert(option.name.as_str()) {
            return Err(DuplicateAssigneeName(option.name.clone()));
        }
    }

    Ok(options)
}
