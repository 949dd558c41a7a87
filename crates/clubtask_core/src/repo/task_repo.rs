//! Task repository contracts and slot-backed implementation.
//!
//! # Invariants
//! - Tasks are append-only; existing records are never rewritten.
//! - Appended ids are strictly greater than every stored id.

use crate::model::task::{Task, TaskDraft};
use crate::repo::next_timestamp_id;
use crate::repo::slot_store::{load_records, save_records, Slot, SlotStore, StoreResult};
use chrono::{DateTime, Utc};
use log::info;

/// Repository interface for assigned tasks.
pub trait TaskRepository {
    fn list_tasks(&self) -> StoreResult<Vec<Task>>;

    /// Freezes `draft` into a new task and appends it.
    ///
    /// Callers must validate the draft first; this method does not.
    fn append_task(&self, draft: &TaskDraft, created_at: DateTime<Utc>) -> StoreResult<Task>;
}

/// Task repository over the `tasks` slot.
pub struct SlotTaskRepository<S: SlotStore> {
    store: S,
}

impl<S: SlotStore> SlotTaskRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: SlotStore> TaskRepository for SlotTaskRepository<S> {
    fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        load_records(&self.store, Slot::Tasks)
    }

    fn append_task(&self, draft: &TaskDraft, created_at: DateTime<Utc>) -> StoreResult<Task> {
        let mut tasks: Vec<Task> = load_records(&self.store, Slot::Tasks)?;
        let id = next_timestamp_id(
            created_at.timestamp_millis(),
            tasks.iter().map(|task| task.id),
        );
        let task = Task::from_draft(id, draft, created_at);

        tasks.push(task.clone());
        save_records(&self.store, Slot::Tasks, &tasks)?;
        info!(
            "event=task_append module=repo status=ok task_id={} assignees={} total={}",
            task.id,
            task.assigned_to.len(),
            tasks.len()
        );
        Ok(task)
    }
}
