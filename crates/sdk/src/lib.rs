//! dvars SDK - Dvar Type Definitions
//!
//! This crate contains the type definitions shared with the variable
//! storage subsystem. It has no dependencies and compiles quickly,
//! allowing parallel compilation of dependent crates.
//!
//! # Modules
//!
//! - [`dvar`] - Value kinds, domains, raw limits and typed values

pub mod dvar;

pub use dvar::*;
