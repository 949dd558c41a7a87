//! Per-member task statistics for the profile view.
//!
//! # Invariants
//! - Unknown members yield all-zero stats instead of an error.
//! - `win_rate` is a whole percentage in `0..=100`.
//! - Completion is read from `Task::status`, which the submission flow never
//!   sets; `completed` stays 0 for tasks created through the form.

use crate::model::member::Member;
use crate::model::task::Task;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
    pub win_rate: u8,
}

/// Tasks whose assignee list names `member` directly.
///
/// Team assignments do not count toward a member.
pub fn tasks_for_member<'a>(
    member: &'a Member,
    tasks: &'a [Task],
) -> impl Iterator<Item = &'a Task> + 'a {
    tasks
        .iter()
        .filter(move |task| task.is_assigned_to(&member.name))
}

/// Aggregates stats for `member_id`, resolved against `members`.
pub fn member_stats(
    member_id: &str,
    members: &[Member],
    tasks: &[Task],
    today: NaiveDate,
) -> MemberStats {
    match members.iter().find(|member| member.id == member_id) {
        Some(member) => stats_for(member, tasks, today),
        None => MemberStats::default(),
    }
}

/// Aggregates stats for an already resolved member.
pub fn stats_for(member: &Member, tasks: &[Task], today: NaiveDate) -> MemberStats {
    let mut stats = MemberStats::default();
    for task in tasks_for_member(member, tasks) {
        stats.total += 1;
        if task.is_completed() {
            stats.completed += 1;
        } else if task.deadline.is_some_and(|deadline| deadline < today) {
            stats.overdue += 1;
        }
    }
    stats.win_rate = win_rate(stats.completed, stats.total);
    stats
}

/// `completed / total` as a percentage, rounded half up.
fn win_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (completed.min(total) * 200 + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::win_rate;

    #[test]
    fn win_rate_rounds_half_up() {
        assert_eq!(win_rate(0, 0), 0);
        assert_eq!(win_rate(1, 3), 33);
        assert_eq!(win_rate(2, 3), 67);
        assert_eq!(win_rate(1, 8), 13);
        assert_eq!(win_rate(5, 5), 100);
    }
}
