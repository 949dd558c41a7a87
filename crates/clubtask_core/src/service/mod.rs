//! Core use-case services.
//!
//! # Responsibility
//! - Pure derivations used by the forms on every change (deadline countdown,
//!   assignee selection, draft validation).
//! - Store-facing orchestration (task submission, member creation, profile
//!   and roster assembly, task board filtering).
//!
//! # Invariants
//! - Date-sensitive functions take `today` explicitly; nothing here reads
//!   the clock except `deadline::local_today`.
//! - Services depend on repository traits, never on a concrete store.

pub mod assign_service;
pub mod assignees;
pub mod club_service;
pub mod deadline;
pub mod stats;
pub mod task_filter;
pub mod validation;
