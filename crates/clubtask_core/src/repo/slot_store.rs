//! Key-value slot contracts and implementations.
//!
//! # Responsibility
//! - Read and write whole JSON documents by slot name.
//! - Decode typed collections, treating corrupt documents as empty.
//!
//! # Invariants
//! - A missing slot reads as `None`, never as an error.
//! - Writes replace the whole slot value.

use crate::db::DbError;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Named storage slots shared with the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Members,
    Tasks,
    DarkMode,
}

impl Slot {
    pub fn key(self) -> &'static str {
        match self {
            Self::Members => "members",
            Self::Tasks => "tasks",
            Self::DarkMode => "darkMode",
        }
    }
}

/// Slot persistence error.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Encode {
        slot: Slot,
        source: serde_json::Error,
    },
    DuplicateId(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode { slot, source } => {
                write!(f, "failed to encode slot `{}`: {source}", slot.key())
            }
            Self::DuplicateId(id) => write!(f, "record id already exists: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode { source, .. } => Some(source),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Narrow get/set interface over named slots.
pub trait SlotStore {
    fn read_slot(&self, slot: Slot) -> StoreResult<Option<String>>;
    fn write_slot(&self, slot: Slot, value: &str) -> StoreResult<()>;
}

impl<S: SlotStore + ?Sized> SlotStore for &S {
    fn read_slot(&self, slot: Slot) -> StoreResult<Option<String>> {
        (**self).read_slot(slot)
    }

    fn write_slot(&self, slot: Slot, value: &str) -> StoreResult<()> {
        (**self).write_slot(slot, value)
    }
}

/// SQLite-backed slot store. Expects a connection from `db::open_db*`.
pub struct SqliteSlotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SlotStore for SqliteSlotStore<'_> {
    fn read_slot(&self, slot: Slot) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [slot.key()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, slot: Slot, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![slot.key(), value],
        )?;
        Ok(())
    }
}

/// Process-local slot store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RefCell<HashMap<Slot, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlotStore {
    fn read_slot(&self, slot: Slot) -> StoreResult<Option<String>> {
        Ok(self.slots.borrow().get(&slot).cloned())
    }

    fn write_slot(&self, slot: Slot, value: &str) -> StoreResult<()> {
        self.slots.borrow_mut().insert(slot, value.to_string());
        Ok(())
    }
}

/// Reads and decodes one slot.
///
/// Returns `None` when the slot is missing or its JSON does not decode; the
/// latter is logged and otherwise ignored.
pub fn load_json<T, S>(store: &S, slot: Slot) -> StoreResult<Option<T>>
where
    T: DeserializeOwned,
    S: SlotStore + ?Sized,
{
    let Some(raw) = store.read_slot(slot)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!(
                "event=slot_decode module=repo status=error slot={} bytes={} error={}",
                slot.key(),
                raw.len(),
                err
            );
            Ok(None)
        }
    }
}

/// Loads a collection slot; missing or corrupt collections read as empty.
pub fn load_records<T, S>(store: &S, slot: Slot) -> StoreResult<Vec<T>>
where
    T: DeserializeOwned,
    S: SlotStore + ?Sized,
{
    Ok(load_json(store, slot)?.unwrap_or_default())
}

/// Replaces a slot with the JSON encoding of `value`.
pub fn save_json<T, S>(store: &S, slot: Slot, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
    S: SlotStore + ?Sized,
{
    let raw =
        serde_json::to_string(value).map_err(|source| StoreError::Encode { slot, source })?;
    store.write_slot(slot, &raw)
}

/// Replaces a collection slot with `records`.
pub fn save_records<T, S>(store: &S, slot: Slot, records: &[T]) -> StoreResult<()>
where
    T: Serialize,
    S: SlotStore + ?Sized,
{
    save_json(store, slot, records)
}
