use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

use super::{Storage, StorageError};

const CREATE_KV: &str = "CREATE TABLE IF NOT EXISTS kv (
    key TEXT NOT NULL PRIMARY KEY,
    value TEXT NOT NULL
);";

/// Snapshot kept under one key of a SQLite key-value table.
pub struct SqliteStorage {
    conn: Connection,
    key: String,
}

impl SqliteStorage {
    /// # Errors
    /// Returns an error if the database cannot be opened or the table created.
    pub fn open(path: &Path, key: &str) -> Result<Self, StorageError> {
        Self::with_connection(Connection::open(path)?, key)
    }

    /// # Errors
    /// Returns an error if the table cannot be created.
    pub fn open_in_memory(key: &str) -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?, key)
    }

    fn with_connection(conn: Connection, key: &str) -> Result<Self, StorageError> {
        conn.execute_batch(CREATE_KV)?;
        Ok(Self {
            conn,
            key: key.to_string(),
        })
    }
}

impl Storage for SqliteStorage {
    fn read_raw(&self) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![self.key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_raw(&self, contents: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![self.key, contents],
        )?;
        Ok(())
    }
}
