/// Thought entity for the append-only log
///
/// This module defines the Thought struct that represents one line the user
/// jotted down, together with the date it was written on.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{ThoughtId, DomainError};

/// One user-submitted entry in the log
///
/// Thoughts are created only by the store's append operation and are never
/// modified or deleted afterwards. The date is the local calendar date at
/// insertion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thought {
    /// Surrogate key assigned by the store
    pub id: ThoughtId,
    /// Day the thought was written down
    pub date: NaiveDate,
    /// What the user typed, already trimmed by the caller
    pub text: String,
}

impl Thought {
    /// Create a new thought with validation
    ///
    /// Used by stores that assign ids themselves; rejects empty text.
    pub fn new(id: ThoughtId, date: NaiveDate, text: String) -> Result<Self, DomainError> {
        if text.is_empty() {
            return Err(DomainError::EmptyThought);
        }

        Ok(Self { id, date, text })
    }

    /// Create a thought from existing data (used when loading from database)
    pub fn from_existing(id: ThoughtId, date: NaiveDate, text: String) -> Self {
        Self { id, date, text }
    }

    /// The `(date, text)` pair shown to the user
    pub fn as_pair(&self) -> (NaiveDate, &str) {
        (self.date, &self.text)
    }
}

/// Trim raw input the way the window does before handing it to the store
///
/// Whitespace-only input collapses to an empty string, which the store
/// rejects without writing.
pub fn normalize_input(raw: &str) -> &str {
    raw.trim()
}
