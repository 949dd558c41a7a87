//! UI preference flags kept next to the domain collections.

use crate::repo::slot_store::{load_json, save_json, Slot, SlotStore, StoreResult};

/// Reads the `darkMode` flag; unset or unreadable means light mode.
pub fn load_dark_mode<S: SlotStore + ?Sized>(store: &S) -> StoreResult<bool> {
    Ok(load_json::<bool, _>(store, Slot::DarkMode)?.unwrap_or(false))
}

pub fn save_dark_mode<S: SlotStore + ?Sized>(store: &S, enabled: bool) -> StoreResult<()> {
    save_json(store, Slot::DarkMode, &enabled)
}
