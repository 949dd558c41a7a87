//! Task board search and team filter.

use crate::model::member::{Member, BUILTIN_TEAMS};
use crate::model::task::Task;

/// Label of the catch-all team filter chip.
pub const ALL_TEAMS: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TeamFilter {
    #[default]
    All,
    Team(String),
}

impl TeamFilter {
    /// Maps a chip label to a filter; `"All"` selects every team.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_TEAMS {
            Self::All
        } else {
            Self::Team(label.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub search: String,
    pub team: TeamFilter,
}

/// Chip labels for the team filter row.
pub fn team_filter_labels() -> Vec<&'static str> {
    std::iter::once(ALL_TEAMS)
        .chain(BUILTIN_TEAMS.iter().copied())
        .collect()
}

/// Keeps tasks matching both the search term and the team filter.
///
/// Search is a case-insensitive substring match on name, description or any
/// assignee. The team filter keeps a task when at least one assignee name
/// resolves to a member of that team.
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    members: &[Member],
    filter: &TaskFilter,
) -> Vec<&'a Task> {
    let needle = filter.search.to_lowercase();
    tasks
        .iter()
        .filter(|task| matches_search(task, &needle))
        .filter(|task| matches_team(task, members, &filter.team))
        .collect()
}

fn matches_search(task: &Task, needle: &str) -> bool {
    let contains = |value: &str| value.to_lowercase().contains(needle);
    contains(task.task_name.as_str())
        || contains(task.description.as_str())
        || task.assigned_to.iter().any(|name| contains(name.as_str()))
}

fn matches_team(task: &Task, members: &[Member], team: &TeamFilter) -> bool {
    let TeamFilter::Team(team) = team else {
        return true;
    };
    task.assigned_to.iter().any(|name| {
        members
            .iter()
            .find(|member| &member.name == name)
            .is_some_and(|member| &member.team == team)
    })
}
