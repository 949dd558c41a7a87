//! Club domain model.
//!
//! # Responsibility
//! - Define the records persisted in the `members` and `tasks` slots.
//! - Define transient form-side shapes (drafts, templates, assignee options).
//!
//! # Invariants
//! - Stored records serialize with camelCase field names.
//! - Task assignees reference members and teams by display name, not id.

pub mod assignee;
pub mod member;
pub mod route;
pub mod task;
pub mod template;
