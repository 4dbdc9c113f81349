/// In-memory implementation of the thought storage interface
///
/// Keeps the log in a vector for the lifetime of the value. Useful for tests
/// and anywhere durability is not wanted.

use std::cell::{Cell, RefCell};

use crate::domain::{Clock, LocalClock, Thought, ThoughtId};
use crate::storage::{StorageError, ThoughtStorage};

pub struct MemoryStorage {
    thoughts: RefCell<Vec<Thought>>,
    next_id: Cell<i64>,
    clock: Box<dyn Clock>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::with_clock(Box::new(LocalClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            thoughts: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            clock,
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ThoughtStorage for MemoryStorage {
    fn append(&self, text: &str) -> Result<bool, StorageError> {
        if text.is_empty() {
            return Ok(false);
        }

        let id = ThoughtId::from_raw(self.next_id.get());
        let thought = Thought::new(id, self.clock.today(), text.to_string())?;
        self.next_id.set(id.value() + 1);
        self.thoughts.borrow_mut().push(thought);

        tracing::debug!("Appended thought {} in memory", id);
        Ok(true)
    }

    fn read_all_ordered(&self) -> Result<Vec<Thought>, StorageError> {
        let mut thoughts = self.thoughts.borrow().clone();
        thoughts.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(thoughts)
    }

    fn count(&self) -> Result<usize, StorageError> {
        Ok(self.thoughts.borrow().len())
    }

    fn close(self) -> Result<(), StorageError> {
        tracing::debug!("Dropping {} in-memory thoughts", self.thoughts.borrow().len());
        Ok(())
    }
}
