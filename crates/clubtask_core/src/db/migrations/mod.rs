//! Schema steps for the slot table.
//!
//! The club store keeps every collection in one `slots` table, so the schema
//! only grows by appending numbered SQL steps. The number of the last step
//! applied lives in `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::{debug, info};
use rusqlite::Connection;

/// `(version, sql)` pairs, ordered by version.
const SCHEMA_STEPS: &[(u32, &str)] = &[(1, include_str!("0001_slots.sql"))];

const SLOT_TABLE: &str = "slots";

/// Version of the last schema step compiled into this build.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |(version, _)| *version)
}

/// Schema version recorded in the database file.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?)
}

/// Brings the slot schema up to `latest_version()` in one transaction.
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` when the file was written by a newer
///   build. Nothing is modified in that case.
/// - `DbError::MissingSlotTable` when the recorded version claims the schema
///   is current but the `slots` table is gone.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from = schema_version(conn)?;
    let latest = latest_version();
    if from > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: latest,
        });
    }

    let pending: Vec<_> = SCHEMA_STEPS
        .iter()
        .filter(|(version, _)| *version > from)
        .collect();

    if !pending.is_empty() {
        let tx = conn.transaction()?;
        for (version, sql) in pending {
            tx.execute_batch(sql)?;
            tx.pragma_update(None, "user_version", version)?;
            debug!("event=db_migrate_step module=db status=ok version={version}");
        }
        tx.commit()?;
        info!("event=db_migrate module=db status=ok from_version={from} to_version={latest}");
    }

    if !slot_table_exists(conn)? {
        return Err(DbError::MissingSlotTable);
    }
    Ok(())
}

fn slot_table_exists(conn: &Connection) -> DbResult<bool> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
        [SLOT_TABLE],
        |row| row.get::<_, bool>(0),
    )?;
    Ok(exists)
}
