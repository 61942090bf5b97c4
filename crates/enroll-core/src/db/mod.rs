//! SQLite-backed key-value storage area.
//!
//! The extension keeps its plan in the browser's local storage area, a flat
//! map from keys to JSON values. This module provides the same shape on top
//! of SQLite: one row per key, the value stored as JSON text.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod storage_queries;

pub use storage_queries::StoredValue;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database, used by unit tests.
    #[cfg(test)]
    pub(crate) fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
