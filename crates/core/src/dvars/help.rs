//! Console help text for dvars

use dvars_engine::DvarStore;

use super::domain::render_domain;
use super::hash::{format_hash, generate_hash};
use super::registry::DvarRegistry;

/// Help text for a dvar name
///
/// The first line is the name with its description, the second the domain
/// if the store knows the variable. Unknown names produce a one-line notice.
pub fn dvar_help(name: &str, registry: &DvarRegistry, store: &dyn DvarStore) -> String {
    help_for(generate_hash(name), name, registry, store)
}

/// Help text for a raw hash
///
/// Unregistered hashes are shown as `0x...`.
pub fn hash_help(hash: u32, registry: &DvarRegistry, store: &dyn DvarStore) -> String {
    help_for(hash, &format_hash(hash), registry, store)
}

fn help_for(
    hash: u32,
    fallback_name: &str,
    registry: &DvarRegistry,
    store: &dyn DvarStore,
) -> String {
    let info = registry.get(hash);
    let domain = store.find(hash).and_then(|handle| store.domain(handle));

    if info.is_none() && domain.is_none() {
        return format!("'{}' is not a registered dvar", fallback_name);
    }

    let mut text = match info {
        Some(info) => info.to_string(),
        None => fallback_name.to_string(),
    };

    if let Some(domain) = domain {
        text.push('\n');
        text.push_str(&render_domain(&domain));
    }

    text
}
