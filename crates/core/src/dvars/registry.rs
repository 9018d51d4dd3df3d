//! Dvar metadata registry
//!
//! Maps name hashes to [`DvarInfo`] records. Registrations accumulate for
//! the lifetime of the process; there is no removal. When a hash is
//! inserted twice the first record stays and later inserts are ignored.

use std::sync::LazyLock;

use dashmap::DashMap;

use super::hash::generate_hash;
use super::info::DvarInfo;

/// Hash-keyed dvar metadata store
#[derive(Debug, Default)]
pub struct DvarRegistry {
    entries: DashMap<u32, DvarInfo>,
}

impl DvarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under `hash`
    ///
    /// Returns `true` if the record was inserted, `false` if the hash was
    /// already present (the existing record is kept).
    pub fn insert(&self, hash: u32, name: &str, description: &str) -> bool {
        let mut inserted = false;
        self.entries.entry(hash).or_insert_with(|| {
            inserted = true;
            DvarInfo::new(hash, name, description)
        });

        if !inserted {
            tracing::trace!("Ignoring duplicate dvar info for {} (0x{:X})", name, hash);
        }
        inserted
    }

    /// Insert a record, hashing the name
    pub fn insert_named(&self, name: &str, description: &str) -> bool {
        self.insert(generate_hash(name), name, description)
    }

    /// Look up a record by hash
    pub fn get(&self, hash: u32) -> Option<DvarInfo> {
        self.entries.get(&hash).map(|info| info.clone())
    }

    /// Look up a record by name
    pub fn get_named(&self, name: &str) -> Option<DvarInfo> {
        self.get(generate_hash(name))
    }

    /// Description for a name, or an empty string if it isn't registered
    pub fn describe(&self, name: &str) -> String {
        self.get_named(name)
            .map(|info| info.description)
            .unwrap_or_default()
    }

    pub fn contains(&self, hash: u32) -> bool {
        self.entries.contains_key(&hash)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records whose name starts with `prefix`, ignoring ASCII case
    ///
    /// Sorted by name, for console autocomplete.
    pub fn complete(&self, prefix: &str) -> Vec<DvarInfo> {
        let prefix = prefix.to_ascii_lowercase();
        let mut matches: Vec<DvarInfo> = self
            .entries
            .iter()
            .filter(|entry| entry.name.to_ascii_lowercase().starts_with(&prefix))
            .map(|entry| entry.value().clone())
            .collect();

        matches.sort_by(|a, b| a.name.cmp(&b.name));
        matches
    }

    /// All records sorted by name
    pub fn snapshot(&self) -> Vec<DvarInfo> {
        self.complete("")
    }

    /// All records as a pretty JSON array, sorted by name
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}

/// Global dvar registry
static REGISTRY: LazyLock<DvarRegistry> = LazyLock::new(DvarRegistry::new);

/// The process-wide registry
pub fn registry() -> &'static DvarRegistry {
    &REGISTRY
}

// ============================================================================
// Global registry APIs
// ============================================================================

/// Insert dvar metadata under a known hash
///
/// First registration wins.
pub fn insert_dvar_info(hash: u32, name: &str, description: &str) -> bool {
    REGISTRY.insert(hash, name, description)
}

/// Insert dvar metadata, hashing the name
pub fn insert_dvar_info_named(name: &str, description: &str) -> bool {
    REGISTRY.insert_named(name, description)
}

/// Look up dvar metadata by hash
pub fn get_dvar_info(hash: u32) -> Option<DvarInfo> {
    REGISTRY.get(hash)
}

/// Description of a dvar, or empty string if unknown
pub fn dvar_description(name: &str) -> String {
    REGISTRY.describe(name)
}

/// Registered dvars whose name starts with `prefix`
pub fn complete_dvars(prefix: &str) -> Vec<DvarInfo> {
    REGISTRY.complete(prefix)
}
