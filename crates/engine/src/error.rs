//! Error types for the variable store

/// Error type for store installation and access
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A store has already been installed for this process
    #[error("Dvar store already initialized")]
    AlreadyInitialized,

    /// No store has been installed yet
    #[error("Dvar store not initialized")]
    NotInitialized,
}
