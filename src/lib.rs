/// Public library interface for Mind Dump
///
/// This module exports the application object, the storage layer and the
/// view model so they can be used by the binary and by tests.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod view;
mod window;

// Re-export public modules and types
pub use domain::*;
pub use storage::{MemoryStorage, SqliteStorage, StorageError, ThoughtStorage};
pub use view::{build_rows, Row};
pub use window::{Control, Focus, Window};

/// Default database file name, created in the working directory
pub const DEFAULT_DB_NAME: &str = "mind_dump.db";

/// Errors that can occur while running the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The Mind Dump application: one store and the window on top of it
pub struct MindDump<S: ThoughtStorage = SqliteStorage> {
    storage: S,
}

impl MindDump<SqliteStorage> {
    /// Open (or create) the thought log at `db_path`
    pub fn new(db_path: PathBuf) -> Result<Self, AppError> {
        tracing::info!("Initializing Mind Dump with database: {:?}", db_path);

        let storage = SqliteStorage::new(db_path)?;
        Ok(Self { storage })
    }
}

impl<S: ThoughtStorage> MindDump<S> {
    /// Use an already opened store
    pub fn with_storage(storage: S) -> Self {
        Self { storage }
    }

    /// Show the window until it is closed, then release the store
    ///
    /// The store is closed even when the window fails; the window's error
    /// takes precedence.
    pub fn run(self) -> Result<(), AppError> {
        let count = self.storage.count()?;
        tracing::info!("Starting window, found {} existing thoughts", count);

        let result = window::run(&self.storage);
        let closed = self.storage.close();

        result?;
        closed?;
        Ok(())
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Release the store without showing the window
    pub fn close(self) -> Result<(), AppError> {
        self.storage.close()?;
        Ok(())
    }
}
