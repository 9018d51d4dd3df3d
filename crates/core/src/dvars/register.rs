//! Dvar registration
//!
//! One entry point per value kind. Each hashes the name, records the
//! metadata in the registry and allocates the slot in the store under the
//! same hash. Bounds and defaults are passed through untouched; the store
//! decides what to do with them.

use dvars_engine::{DvarHandle, DvarStore, StoreError};

use super::flags::DvarFlags;
use super::hash::generate_hash;
use super::registry::{registry, DvarRegistry};

/// Registers dvars against a registry and a store
///
/// # Example
/// ```ignore
/// use dvars_core::{DvarFlags, DvarRegistrar};
///
/// let registrar = DvarRegistrar::global()?;
/// let fullbright = registrar.register_bool(
///     "r_fullbright",
///     false,
///     DvarFlags::CHEAT,
///     "Toggles rendering without lighting",
/// );
/// ```
#[derive(Clone, Copy)]
pub struct DvarRegistrar<'a> {
    registry: &'a DvarRegistry,
    store: &'a dyn DvarStore,
}

impl<'a> DvarRegistrar<'a> {
    pub fn new(registry: &'a DvarRegistry, store: &'a dyn DvarStore) -> Self {
        Self { registry, store }
    }

    pub fn registry(&self) -> &'a DvarRegistry {
        self.registry
    }

    pub fn store(&self) -> &'a dyn DvarStore {
        self.store
    }

    /// Hash the name and record its metadata
    fn prepare(&self, name: &str, description: &str) -> u32 {
        let hash = generate_hash(name);
        self.registry.insert(hash, name, description);
        tracing::debug!("Registering dvar {} (0x{:X})", name, hash);
        hash
    }

    pub fn register_bool(
        &self,
        name: &str,
        value: bool,
        flags: DvarFlags,
        description: &str,
    ) -> DvarHandle {
        let hash = self.prepare(name, description);
        self.store.register_bool(hash, "", value, flags.bits())
    }

    pub fn register_int(
        &self,
        name: &str,
        value: i32,
        min: i32,
        max: i32,
        flags: DvarFlags,
        description: &str,
    ) -> DvarHandle {
        let hash = self.prepare(name, description);
        self.store.register_int(hash, "", value, min, max, flags.bits())
    }

    pub fn register_float(
        &self,
        name: &str,
        value: f32,
        min: f32,
        max: f32,
        flags: DvarFlags,
        description: &str,
    ) -> DvarHandle {
        let hash = self.prepare(name, description);
        self.store.register_float(hash, "", value, min, max, flags.bits())
    }

    pub fn register_string(
        &self,
        name: &str,
        value: &str,
        flags: DvarFlags,
        description: &str,
    ) -> DvarHandle {
        let hash = self.prepare(name, description);
        self.store.register_string(hash, "", value, flags.bits())
    }

    /// Register a 4-component vector with the same bounds on every component
    pub fn register_vec4(
        &self,
        name: &str,
        value: [f32; 4],
        min: f32,
        max: f32,
        flags: DvarFlags,
        description: &str,
    ) -> DvarHandle {
        let hash = self.prepare(name, description);
        self.store.register_vec4(hash, "", value, min, max, flags.bits())
    }

    /// Register an enumeration; the value is an index into `values`
    pub fn register_enum(
        &self,
        name: &str,
        values: &[&str],
        default_index: i32,
        flags: DvarFlags,
        description: &str,
    ) -> DvarHandle {
        let hash = self.prepare(name, description);
        self.store.register_enum(hash, "", values, default_index, flags.bits())
    }
}

impl DvarRegistrar<'static> {
    /// Registrar over the global registry and the installed store
    pub fn global() -> Result<Self, StoreError> {
        Ok(Self::new(registry(), dvars_engine::store()?))
    }
}

impl std::fmt::Debug for DvarRegistrar<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DvarRegistrar")
            .field("registered", &self.registry.len())
            .finish()
    }
}

// ============================================================================
// Global registration APIs
// ============================================================================

/// Register a boolean dvar globally
///
/// Fails only if no store has been installed; nothing is recorded then.
pub fn register_bool(
    name: &str,
    value: bool,
    flags: DvarFlags,
    description: &str,
) -> Result<DvarHandle, StoreError> {
    Ok(DvarRegistrar::global()?.register_bool(name, value, flags, description))
}

/// Register an integer dvar globally
pub fn register_int(
    name: &str,
    value: i32,
    min: i32,
    max: i32,
    flags: DvarFlags,
    description: &str,
) -> Result<DvarHandle, StoreError> {
    Ok(DvarRegistrar::global()?.register_int(name, value, min, max, flags, description))
}

/// Register a float dvar globally
pub fn register_float(
    name: &str,
    value: f32,
    min: f32,
    max: f32,
    flags: DvarFlags,
    description: &str,
) -> Result<DvarHandle, StoreError> {
    Ok(DvarRegistrar::global()?.register_float(name, value, min, max, flags, description))
}

/// Register a string dvar globally
pub fn register_string(
    name: &str,
    value: &str,
    flags: DvarFlags,
    description: &str,
) -> Result<DvarHandle, StoreError> {
    Ok(DvarRegistrar::global()?.register_string(name, value, flags, description))
}

/// Register a 4-component vector dvar globally
pub fn register_vec4(
    name: &str,
    value: [f32; 4],
    min: f32,
    max: f32,
    flags: DvarFlags,
    description: &str,
) -> Result<DvarHandle, StoreError> {
    Ok(DvarRegistrar::global()?.register_vec4(name, value, min, max, flags, description))
}

/// Register an enumeration dvar globally
pub fn register_enum(
    name: &str,
    values: &[&str],
    default_index: i32,
    flags: DvarFlags,
    description: &str,
) -> Result<DvarHandle, StoreError> {
    Ok(DvarRegistrar::global()?.register_enum(name, values, default_index, flags, description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dvars_engine::MemoryDvarStore;
    use dvars_sdk::{DvarDomain, DvarValue, FloatBounds, IntBounds};

    #[test]
    fn test_register_keeps_registry_and_store_in_sync() {
        let registry = DvarRegistry::new();
        let store = MemoryDvarStore::new();
        let registrar = DvarRegistrar::new(&registry, &store);

        let handle = registrar.register_int(
            "jump_spreadAdd",
            64,
            0,
            512,
            DvarFlags::REPLICATED,
            "Spread added while jumping",
        );

        let hash = generate_hash("jump_spreadAdd");
        assert_eq!(store.find(hash), Some(handle));
        assert_eq!(registry.get(hash).unwrap().name, "jump_spreadAdd");
        assert_eq!(registry.describe("jump_spreadAdd"), "Spread added while jumping");
    }

    #[test]
    fn test_store_receives_empty_name_and_flag_bits() {
        let registry = DvarRegistry::new();
        let store = MemoryDvarStore::new();
        let registrar = DvarRegistrar::new(&registry, &store);

        let handle = registrar.register_string(
            "ui_name",
            "player",
            DvarFlags::SAVED | DvarFlags::LATCHED,
            "",
        );

        let slot = store.slot(handle).unwrap();
        assert_eq!(slot.name, "");
        assert_eq!(slot.flags, 0x3);
        assert_eq!(slot.value, DvarValue::String("player".into()));
    }

    #[test]
    fn test_every_kind_round_trips_description() {
        let registry = DvarRegistry::new();
        let store = MemoryDvarStore::new();
        let registrar = DvarRegistrar::new(&registry, &store);
        let flags = DvarFlags::empty();

        let b = registrar.register_bool("t_bool", true, flags, "bool help");
        let i = registrar.register_int("t_int", 1, 0, 2, flags, "int help");
        let f = registrar.register_float("t_float", 0.5, 0.0, 1.0, flags, "float help");
        let s = registrar.register_string("t_string", "x", flags, "string help");
        let v = registrar.register_vec4("t_vec4", [0.0; 4], 0.0, 1.0, flags, "vec4 help");
        let e = registrar.register_enum("t_enum", &["a", "b"], 0, flags, "enum help");

        for (name, help) in [
            ("t_bool", "bool help"),
            ("t_int", "int help"),
            ("t_float", "float help"),
            ("t_string", "string help"),
            ("t_vec4", "vec4 help"),
            ("t_enum", "enum help"),
        ] {
            assert_eq!(registry.describe(name), help);
        }

        assert_eq!(store.domain(b), Some(DvarDomain::Boolean));
        assert_eq!(store.domain(i), Some(DvarDomain::Integer(IntBounds::new(0, 2))));
        assert_eq!(
            store.domain(f),
            Some(DvarDomain::Value(FloatBounds::new(0.0, 1.0)))
        );
        assert_eq!(store.domain(s), Some(DvarDomain::String));
        assert_eq!(
            store.domain(v),
            Some(DvarDomain::Vec4(FloatBounds::new(0.0, 1.0)))
        );
        assert_eq!(
            store.domain(e),
            Some(DvarDomain::Enumeration(vec!["a".into(), "b".into()]))
        );
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_no_validation_of_bounds() {
        let registry = DvarRegistry::new();
        let store = MemoryDvarStore::new();
        let registrar = DvarRegistrar::new(&registry, &store);

        // min > max and an out-of-range default are passed through as-is
        let handle = registrar.register_int("t_inverted", 99, 10, 0, DvarFlags::empty(), "");
        assert_eq!(store.value(handle), Some(DvarValue::Int(99)));
        assert_eq!(
            store.domain(handle),
            Some(DvarDomain::Integer(IntBounds::new(10, 0)))
        );
    }

    #[test]
    fn test_global_registration() {
        // The only test in this crate that installs the global store
        let _ = dvars_engine::init_store(Box::new(MemoryDvarStore::new()));

        let handle = register_enum(
            "test_global_enum",
            &["low", "medium", "high"],
            1,
            DvarFlags::SAVED,
            "Global enum",
        )
        .unwrap();

        let store = dvars_engine::store().unwrap();
        assert_eq!(store.find(generate_hash("test_global_enum")), Some(handle));
        assert_eq!(
            crate::dvars::dvar_description("Test_Global_Enum"),
            "Global enum"
        );
    }

    #[test]
    fn test_reregistration_keeps_first_description() {
        let registry = DvarRegistry::new();
        let store = MemoryDvarStore::new();
        let registrar = DvarRegistrar::new(&registry, &store);

        let first = registrar.register_bool("t_twice", true, DvarFlags::empty(), "first");
        let second = registrar.register_bool("T_TWICE", false, DvarFlags::empty(), "second");

        assert_eq!(first, second);
        assert_eq!(registry.describe("t_twice"), "first");
    }
}
