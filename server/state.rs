use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use subway_graph::storage::{save_snapshot, MemoryStorage};
use subway_graph::{Result, SubwayError};

/// Shared store of the server
///
/// Every request holds the lock for its whole load, transform and write
/// cycle, so changes to one line never interleave.
pub struct AppState {
    storage: Mutex<MemoryStorage>,
    data_file: Option<PathBuf>,
}

impl AppState {
    #[must_use]
    pub fn new(storage: MemoryStorage, data_file: Option<PathBuf>) -> Self {
        Self {
            storage: Mutex::new(storage),
            data_file,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryStorage>> {
        self.storage
            .lock()
            .map_err(|_| SubwayError::Storage("storage lock poisoned".to_string()))
    }

    /// Run a read-only operation against the shared store
    pub fn read<T>(&self, operation: impl FnOnce(&MemoryStorage) -> Result<T>) -> Result<T> {
        let guard = self.lock()?;
        operation(&guard)
    }

    /// Run a mutating operation all-or-nothing
    ///
    /// The operation works on a copy of the store. The copy replaces the
    /// shared store only if the operation succeeds and the snapshot file,
    /// when configured, has been written.
    pub fn write<T>(&self, operation: impl FnOnce(&mut MemoryStorage) -> Result<T>) -> Result<T> {
        let mut guard = self.lock()?;
        let mut draft = guard.clone();
        let value = operation(&mut draft)?;

        if let Some(path) = &self.data_file {
            save_snapshot(&draft, path)?;
        }
        *guard = draft;
        Ok(value)
    }
}
