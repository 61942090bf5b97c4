//! Storage entry reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_ENTRY_SQL: &str = "SELECT value, updated_at FROM storage WHERE key = ?1";
const UPSERT_ENTRY_SQL: &str = "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_ENTRY_SQL: &str = "DELETE FROM storage WHERE key = ?1";

/// Raw value of a storage entry with its last write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredValue {
    pub value: String,
    /// `None` when the stored write time does not parse
    pub updated_at: Option<Timestamp>,
}

impl super::Database {
    /// Reads the value stored under `key`, if any.
    pub fn get_entry(&self, key: &str) -> Result<Option<StoredValue>> {
        self.connection
            .query_row(SELECT_ENTRY_SQL, params![key], |row| {
                Ok(StoredValue {
                    value: row.get(0)?,
                    updated_at: row.get::<_, String>(1)?.parse::<Timestamp>().ok(),
                })
            })
            .optional()
            .db_context("Failed to read storage entry")
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub fn set_entry(&self, key: &str, value: &str) -> Result<Timestamp> {
        let now = Timestamp::now();
        self.connection
            .execute(UPSERT_ENTRY_SQL, params![key, value, now.to_string()])
            .db_context("Failed to write storage entry")?;
        Ok(now)
    }

    /// Removes the entry under `key`. Returns whether an entry existed.
    pub fn remove_entry(&self, key: &str) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_ENTRY_SQL, params![key])
            .db_context("Failed to remove storage entry")?;
        Ok(removed > 0)
    }
}
