/// Core identifier types used throughout the domain layer
///
/// Thoughts are keyed by the integer surrogate key the store assigns on
/// insertion, so the id type wraps a plain `i64` rather than a UUID.

use std::fmt;
use serde::{Deserialize, Serialize};

/// Unique identifier for a thought
///
/// This is a wrapper around the store's rowid to provide type safety. Ids are
/// assigned by the store, increase monotonically and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ThoughtId(pub i64);

impl ThoughtId {
    /// Wrap a raw id loaded from storage
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ThoughtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
