//! dvars Engine - Variable Storage Interface and Global Store
//!
//! This crate handles:
//! - The [`DvarStore`] interface the registry allocates slots through
//! - Storing the installed store in a thread-safe global
//! - An in-memory store for tooling and tests
//!
//! # Architecture
//!
//! A store is installed once during startup via [`init_store`] and accessed
//! through [`store()`] / [`try_store()`]. Slots are addressed by the 32-bit
//! name hash; the store hands back an opaque [`DvarHandle`].

pub mod error;
pub mod globals;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use globals::{init_store, is_store_initialized, store, try_store};
pub use memory::{DvarSlot, MemoryDvarStore};
pub use store::{DvarHandle, DvarStore};
