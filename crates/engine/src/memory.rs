//! In-memory dvar store
//!
//! A plain process-local implementation of [`DvarStore`]. Slots live in a
//! slotmap behind a lock; values are kept as given, with no clamping and no
//! persistence. Used by tooling that runs without the game, and by tests.

use std::collections::HashMap;

use parking_lot::RwLock;
use slotmap::SlotMap;

use dvars_sdk::{DvarDomain, DvarValue, FloatBounds, IntBounds};

use crate::store::{DvarHandle, DvarStore};

/// A single allocated slot
#[derive(Debug, Clone)]
pub struct DvarSlot {
    pub hash: u32,
    pub name: String,
    pub value: DvarValue,
    pub domain: DvarDomain,
    pub flags: u32,
}

#[derive(Default)]
struct Slots {
    slots: SlotMap<DvarHandle, DvarSlot>,
    by_hash: HashMap<u32, DvarHandle>,
}

/// Process-local dvar store
#[derive(Default)]
pub struct MemoryDvarStore {
    inner: RwLock<Slots>,
}

impl MemoryDvarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a slot, or return the existing one for this hash
    fn allocate(&self, slot: DvarSlot) -> DvarHandle {
        let mut inner = self.inner.write();

        if let Some(&handle) = inner.by_hash.get(&slot.hash) {
            tracing::trace!("Dvar 0x{:X} already allocated, reusing slot", slot.hash);
            return handle;
        }

        let hash = slot.hash;
        let handle = inner.slots.insert(slot);
        inner.by_hash.insert(hash, handle);
        handle
    }

    /// Current value of a slot
    pub fn value(&self, handle: DvarHandle) -> Option<DvarValue> {
        self.inner.read().slots.get(handle).map(|s| s.value.clone())
    }

    /// Raw flag bits of a slot
    pub fn flags(&self, handle: DvarHandle) -> Option<u32> {
        self.inner.read().slots.get(handle).map(|s| s.flags)
    }

    /// Snapshot of a slot
    pub fn slot(&self, handle: DvarHandle) -> Option<DvarSlot> {
        self.inner.read().slots.get(handle).cloned()
    }

    /// Number of allocated slots
    pub fn len(&self) -> usize {
        self.inner.read().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DvarStore for MemoryDvarStore {
    fn register_bool(&self, hash: u32, name: &str, value: bool, flags: u32) -> DvarHandle {
        self.allocate(DvarSlot {
            hash,
            name: name.to_string(),
            value: DvarValue::Bool(value),
            domain: DvarDomain::Boolean,
            flags,
        })
    }

    fn register_int(
        &self,
        hash: u32,
        name: &str,
        value: i32,
        min: i32,
        max: i32,
        flags: u32,
    ) -> DvarHandle {
        self.allocate(DvarSlot {
            hash,
            name: name.to_string(),
            value: DvarValue::Int(value),
            domain: DvarDomain::Integer(IntBounds::new(min, max)),
            flags,
        })
    }

    fn register_float(
        &self,
        hash: u32,
        name: &str,
        value: f32,
        min: f32,
        max: f32,
        flags: u32,
    ) -> DvarHandle {
        self.allocate(DvarSlot {
            hash,
            name: name.to_string(),
            value: DvarValue::Float(value),
            domain: DvarDomain::Value(FloatBounds::new(min, max)),
            flags,
        })
    }

    fn register_string(&self, hash: u32, name: &str, value: &str, flags: u32) -> DvarHandle {
        self.allocate(DvarSlot {
            hash,
            name: name.to_string(),
            value: DvarValue::String(value.to_string()),
            domain: DvarDomain::String,
            flags,
        })
    }

    fn register_vec4(
        &self,
        hash: u32,
        name: &str,
        value: [f32; 4],
        min: f32,
        max: f32,
        flags: u32,
    ) -> DvarHandle {
        self.allocate(DvarSlot {
            hash,
            name: name.to_string(),
            value: DvarValue::Vec4(value),
            domain: DvarDomain::Vec4(FloatBounds::new(min, max)),
            flags,
        })
    }

    fn register_enum(
        &self,
        hash: u32,
        name: &str,
        values: &[&str],
        default_index: i32,
        flags: u32,
    ) -> DvarHandle {
        self.allocate(DvarSlot {
            hash,
            name: name.to_string(),
            value: DvarValue::Enum(default_index),
            domain: DvarDomain::Enumeration(values.iter().map(|s| s.to_string()).collect()),
            flags,
        })
    }

    fn find(&self, hash: u32) -> Option<DvarHandle> {
        self.inner.read().by_hash.get(&hash).copied()
    }

    fn domain(&self, handle: DvarHandle) -> Option<DvarDomain> {
        self.inner.read().slots.get(handle).map(|s| s.domain.clone())
    }
}

impl std::fmt::Debug for MemoryDvarStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDvarStore")
            .field("slots", &self.len())
            .finish()
    }
}
