//! Global dvar store slot
//!
//! The storage subsystem is installed once during startup and stored here.
//! Access is thread-safe via OnceLock.

use std::sync::OnceLock;

use crate::error::StoreError;
use crate::store::DvarStore;

/// Global store storage
static STORE: OnceLock<Box<dyn DvarStore>> = OnceLock::new();

/// Install the process-wide dvar store
///
/// Called once during startup. Returns error if already initialized.
pub fn init_store(store: Box<dyn DvarStore>) -> Result<(), StoreError> {
    STORE.set(store).map_err(|_| StoreError::AlreadyInitialized)?;
    tracing::info!("Dvar store initialized");
    Ok(())
}

/// Get the installed store
pub fn store() -> Result<&'static dyn DvarStore, StoreError> {
    try_store().ok_or(StoreError::NotInitialized)
}

/// Try to get the installed store
pub fn try_store() -> Option<&'static dyn DvarStore> {
    STORE.get().map(|s| s.as_ref())
}

/// Check if a store is installed
pub fn is_store_initialized() -> bool {
    STORE.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDvarStore;

    #[test]
    fn test_init_once() {
        // The only test in this crate that touches the global slot
        assert!(init_store(Box::new(MemoryDvarStore::new())).is_ok());
        assert!(is_store_initialized());
        assert!(store().is_ok());
        assert!(matches!(
            init_store(Box::new(MemoryDvarStore::new())),
            Err(StoreError::AlreadyInitialized)
        ));
    }
}
