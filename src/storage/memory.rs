use std::cell::{Cell, RefCell};

use super::{Storage, StorageError};

/// In-process storage, mostly for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    contents: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw saved document, valid or not.
    #[must_use]
    pub fn with_contents(raw: &str) -> Self {
        Self {
            contents: RefCell::new(Some(raw.to_string())),
            writes: Cell::new(0),
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    /// Number of snapshots written so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl Storage for MemoryStorage {
    fn read_raw(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents.borrow().clone())
    }

    fn write_raw(&self, contents: &str) -> Result<(), StorageError> {
        *self.contents.borrow_mut() = Some(contents.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
