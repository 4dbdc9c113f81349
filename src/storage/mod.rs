/// Storage layer for persisting thoughts
///
/// This module handles all persistence for the append-only thought log. The
/// window only ever talks to the `ThoughtStorage` trait, so the SQLite engine
/// can be swapped for the in-memory one without touching the UI.

pub mod sqlite;
pub mod memory;
pub mod migrations;

// Re-export the main storage types
pub use sqlite::*;
pub use memory::*;

use thiserror::Error;
use crate::domain::{DomainError, Thought};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Invalid thought: {0}")]
    Domain(#[from] DomainError),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the storage interface for thoughts
///
/// The log is append-only: there is no way to update or remove an entry
/// through this interface.
pub trait ThoughtStorage {
    /// Append a thought dated today
    ///
    /// Returns `Ok(false)` without writing anything when `text` is empty.
    /// The id assigned to the new thought is not returned.
    fn append(&self, text: &str) -> Result<bool, StorageError>;

    /// Every stored thought, newest date first and newest id first within a date
    fn read_all_ordered(&self) -> Result<Vec<Thought>, StorageError>;

    /// Number of stored thoughts
    fn count(&self) -> Result<usize, StorageError>;

    /// Release the underlying storage handle
    fn close(self) -> Result<(), StorageError>
    where
        Self: Sized;
}
