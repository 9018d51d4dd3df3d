//! Dvar System - Hashed metadata registry and domain descriptions
//!
//! Dvars are identified by a 32-bit hash of their name rather than by the
//! name itself. This module provides:
//!
//! 1. **Hashing** - the case-insensitive name hash shared with the store
//! 2. **Registry** - hash → name and description, for help and autocomplete
//! 3. **Domain rendering** - legal values of a dvar as console text
//! 4. **Registration** - one call per kind that keeps registry and store in sync
//!
//! # Example
//!
//! ```ignore
//! use dvars_core::dvars::{dvar_description, register_int, DvarFlags};
//!
//! let handle = register_int(
//!     "jump_height",
//!     39,
//!     0,
//!     1000,
//!     DvarFlags::REPLICATED,
//!     "Maximum jump height",
//! )?;
//!
//! assert_eq!(dvar_description("JUMP_HEIGHT"), "Maximum jump height");
//! ```
//!
//! # Registry
//!
//! ```text
//! name ──► generate_hash ──► u32 ──┬──► DvarRegistry
//!                                  └──► DvarStore ──► DvarHandle
//! ```

mod client;
mod domain;
mod flags;
mod hash;
mod help;
mod info;
mod register;
mod registry;

pub use client::{register_client_dvars, ClientDvars};
pub use domain::{render_domain, render_raw_domain};
pub use flags::DvarFlags;
pub use hash::{format_hash, generate_hash, hash_bytes};
pub use help::{dvar_help, hash_help};
pub use info::DvarInfo;
pub use register::{
    register_bool, register_enum, register_float, register_int, register_string, register_vec4,
    DvarRegistrar,
};
pub use registry::{
    complete_dvars, dvar_description, get_dvar_info, insert_dvar_info, insert_dvar_info_named,
    registry, DvarRegistry,
};

// Re-export SDK types for convenience
pub use dvars_sdk::{DvarDomain, DvarType, DvarValue, FloatBounds, IntBounds, RawDvarLimits};
