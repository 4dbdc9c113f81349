/// SQLite implementation of the thought storage interface
///
/// This module provides the concrete SQLite implementation for storing and
/// retrieving thoughts. It handles all SQL queries and row conversion.

use std::path::PathBuf;
use rusqlite::{Connection, params};
use chrono::NaiveDate;

use crate::domain::{Clock, LocalClock, Thought, ThoughtId};
use crate::storage::{StorageError, ThoughtStorage, migrations};

/// SQLite-based storage implementation
///
/// This struct holds a connection to the SQLite database and the clock used
/// to date new thoughts.
pub struct SqliteStorage {
    conn: Connection,
    clock: Box<dyn Clock>,
}

impl SqliteStorage {
    /// Create a new SQLite storage instance dated by the local clock
    ///
    /// This opens (or creates) the database file and makes sure the schema
    /// exists. Safe to call on every startup.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        Self::with_clock(db_path, Box::new(LocalClock))
    }

    /// Open the database file with a custom clock
    pub fn with_clock(db_path: PathBuf, clock: Box<dyn Clock>) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        let storage = Self::from_connection(conn, clock)?;
        tracing::info!("SQLite storage initialized at: {:?}", db_path);
        Ok(storage)
    }

    /// Open a private in-memory database (nothing survives `close`)
    pub fn open_in_memory(clock: Box<dyn Clock>) -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open in-memory database: {}", e)))?;

        Self::from_connection(conn, clock)
    }

    fn from_connection(conn: Connection, clock: Box<dyn Clock>) -> Result<Self, StorageError> {
        migrations::initialize_database(&conn)?;
        Ok(Self { conn, clock })
    }

    fn row_to_thought(row: &rusqlite::Row<'_>) -> rusqlite::Result<Thought> {
        let id: i64 = row.get(0)?;
        let date: NaiveDate = row.get(1)?;
        let text: String = row.get(2)?;

        Ok(Thought::from_existing(ThoughtId::from_raw(id), date, text))
    }
}

impl ThoughtStorage for SqliteStorage {
    fn append(&self, text: &str) -> Result<bool, StorageError> {
        if text.is_empty() {
            return Ok(false);
        }

        let today = self.clock.today();
        self.conn.execute(
            "INSERT INTO thoughts (date, thought) VALUES (?1, ?2)",
            params![today, text],
        )?;

        tracing::debug!("Appended thought {} for {}", self.conn.last_insert_rowid(), today);
        Ok(true)
    }

    fn read_all_ordered(&self) -> Result<Vec<Thought>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, thought FROM thoughts ORDER BY date DESC, id DESC"
        )?;

        let thoughts = stmt
            .query_map([], Self::row_to_thought)?
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Read {} thoughts", thoughts.len());
        Ok(thoughts)
    }

    fn count(&self) -> Result<usize, StorageError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM thoughts", [], |row| row.get(0))?;

        Ok(count as usize)
    }

    fn close(self) -> Result<(), StorageError> {
        self.conn.close().map_err(|(_, e)| StorageError::Query(e))?;
        tracing::info!("SQLite storage closed");
        Ok(())
    }
}
