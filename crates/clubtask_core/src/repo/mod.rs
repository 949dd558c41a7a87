//! Persistence layer over named key-value slots.
//!
//! # Responsibility
//! - Define the `SlotStore` seam injected into every store-facing service.
//! - Provide member/task repositories with whole-collection
//!   read-modify-write semantics.
//!
//! # Invariants
//! - Every collection slot holds one JSON array.
//! - There is no optimistic-concurrency check: a second writer on the same
//!   backing store can silently overwrite an append.

pub mod member_repo;
pub mod preferences;
pub mod slot_store;
pub mod task_repo;

/// Picks a timestamp-based id that is strictly greater than every existing
/// one.
pub(crate) fn next_timestamp_id(now_ms: i64, existing: impl IntoIterator<Item = i64>) -> i64 {
    match existing.into_iter().max() {
        Some(last) if last >= now_ms => last + 1,
        _ => now_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::next_timestamp_id;

    #[test]
    fn next_id_uses_clock_when_ahead_of_existing() {
        assert_eq!(next_timestamp_id(1_000, [10, 20]), 1_000);
        assert_eq!(next_timestamp_id(1_000, []), 1_000);
    }

    #[test]
    fn next_id_stays_monotonic_when_clock_lags() {
        assert_eq!(next_timestamp_id(1_000, [1_000]), 1_001);
        assert_eq!(next_timestamp_id(1_000, [999, 5_000]), 5_001);
    }
}
