//! Dvar metadata record

use serde::{Deserialize, Serialize};

use super::hash::{format_hash, generate_hash};

/// Descriptive metadata for one dvar
///
/// Created once at registration and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DvarInfo {
    /// Name hash, the registry key
    pub hash: u32,
    /// Name as registered (original casing)
    pub name: String,
    /// Help text
    pub description: String,
}

impl DvarInfo {
    /// Create a record for a known hash
    pub fn new(hash: u32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            hash,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Create a record, hashing the name
    pub fn named(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(generate_hash(&name), name, description)
    }

    /// Hash rendered as `0x...`
    pub fn hash_string(&self) -> String {
        format_hash(self.hash)
    }
}

impl std::fmt::Display for DvarInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} - {}", self.name, self.description)
        }
    }
}
