//! Member repository contracts and slot-backed implementation.
//!
//! # Invariants
//! - Default members are always listed first, in roster order.
//! - Stored members whose id collides with a default id are never listed.
//! - Inserts never overwrite an existing id.

use crate::model::member::{default_members, Member, MemberId};
use crate::repo::slot_store::{
    load_records, save_records, Slot, SlotStore, StoreError, StoreResult,
};
use log::info;
use std::collections::HashSet;

/// Repository interface for club members.
pub trait MemberRepository {
    fn list_members(&self) -> StoreResult<Vec<Member>>;
    fn get_member(&self, id: &str) -> StoreResult<Option<Member>>;
    fn insert_member(&self, member: &Member) -> StoreResult<MemberId>;
}

/// Member repository over the `members` slot.
pub struct SlotMemberRepository<S: SlotStore> {
    store: S,
}

impl<S: SlotStore> SlotMemberRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: SlotStore> MemberRepository for SlotMemberRepository<S> {
    fn list_members(&self) -> StoreResult<Vec<Member>> {
        let mut members = default_members();
        let default_ids: HashSet<MemberId> = members.iter().map(|m| m.id.clone()).collect();
        let stored: Vec<Member> = load_records(&self.store, Slot::Members)?;
        members.extend(
            stored
                .into_iter()
                .filter(|member| !default_ids.contains(&member.id)),
        );
        Ok(members)
    }

    fn get_member(&self, id: &str) -> StoreResult<Option<Member>> {
        Ok(self
            .list_members()?
            .into_iter()
            .find(|member| member.id == id))
    }

    fn insert_member(&self, member: &Member) -> StoreResult<MemberId> {
        let taken = default_members()
            .iter()
            .any(|existing| existing.id == member.id);
        let mut stored: Vec<Member> = load_records(&self.store, Slot::Members)?;
        if taken || stored.iter().any(|existing| existing.id == member.id) {
            return Err(StoreError::DuplicateId(member.id.clone()));
        }

        stored.push(member.clone());
        save_records(&self.store, Slot::Members, &stored)?;
        info!(
            "event=member_insert module=repo status=ok member_id={} stored_total={}",
            member.id,
            stored.len()
        );
        Ok(member.id.clone())
    }
}
