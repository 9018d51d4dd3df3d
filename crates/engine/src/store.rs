//! Variable storage interface
//!
//! The storage subsystem owns the actual dvar slots. This crate only
//! describes what the registry needs from it: one allocation primitive per
//! value kind, keyed by the name hash, and a way to read back a slot's
//! domain for help text.

use dvars_sdk::DvarDomain;
use slotmap::new_key_type;

new_key_type! {
    /// Opaque handle to an allocated dvar slot
    pub struct DvarHandle;
}

/// Storage primitives for dvar slots
///
/// Every `register_*` call receives the name hash, a display name (the
/// registry always passes an empty one, names live in the registry), the
/// default value, optional bounds and raw flag bits. Implementations own
/// validation of bounds and defaults.
pub trait DvarStore: Send + Sync {
    fn register_bool(&self, hash: u32, name: &str, value: bool, flags: u32) -> DvarHandle;

    fn register_int(
        &self,
        hash: u32,
        name: &str,
        value: i32,
        min: i32,
        max: i32,
        flags: u32,
    ) -> DvarHandle;

    fn register_float(
        &self,
        hash: u32,
        name: &str,
        value: f32,
        min: f32,
        max: f32,
        flags: u32,
    ) -> DvarHandle;

    fn register_string(&self, hash: u32, name: &str, value: &str, flags: u32) -> DvarHandle;

    fn register_vec4(
        &self,
        hash: u32,
        name: &str,
        value: [f32; 4],
        min: f32,
        max: f32,
        flags: u32,
    ) -> DvarHandle;

    fn register_enum(
        &self,
        hash: u32,
        name: &str,
        values: &[&str],
        default_index: i32,
        flags: u32,
    ) -> DvarHandle;

    /// Find an allocated slot by hash
    fn find(&self, hash: u32) -> Option<DvarHandle>;

    /// Kind and bounds of a slot
    fn domain(&self, handle: DvarHandle) -> Option<DvarDomain>;
}
