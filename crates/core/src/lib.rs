//! dvars - Core Logic
//!
//! This crate contains the hashed dvar registry, domain rendering and
//! registration entry points, plus startup wiring for logging and config.
//!
//! # Re-exports
//!
//! This crate re-exports the SDK and engine crates for convenience:
//! - [`sdk`] - Dvar kinds, domains and values
//! - [`engine`] - Store interface and the global store slot

use tracing::info;

// Re-export SDK and engine crates
pub use dvars_engine as engine;
pub use dvars_sdk as sdk;

pub mod config;
pub mod dvars;
pub mod logging;

// Re-export commonly used items
pub use dvars::{
    complete_dvars, dvar_description, dvar_help, format_hash, generate_hash, get_dvar_info,
    hash_help, insert_dvar_info, insert_dvar_info_named, register_bool, register_client_dvars,
    register_enum, register_float, register_int, register_string, register_vec4, registry,
    render_domain, render_raw_domain, ClientDvars, DvarFlags, DvarInfo, DvarRegistrar,
    DvarRegistry,
};

// Re-export config types
pub use config::{ConfigError, ConfigResult, CoreConfig, DescriptionTable};

pub use logging::init_logging;

/// Initialize logging and load the description table
///
/// Returns the number of descriptions added to the global registry. A
/// missing description file is not an error.
pub fn init(config: &CoreConfig) -> ConfigResult<usize> {
    init_logging(config);
    info!("dvars initializing...");

    if !config.load_descriptions {
        return Ok(0);
    }

    let path = crate::config::descriptions_path()?;
    if !path.exists() {
        tracing::debug!("No description table at {:?}", path);
        return Ok(0);
    }

    let added = DescriptionTable::load(&path)?.apply(registry());
    info!("Loaded {} dvar descriptions", added);
    Ok(added)
}

/// Shutdown
///
/// Registrations live for the whole process, so this only logs.
pub fn shutdown() {
    info!("dvars shutting down ({} dvars registered)", registry().len());
}
