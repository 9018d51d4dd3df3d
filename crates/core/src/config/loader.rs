//! Config path resolution
//!
//! Handles resolving paths for configuration files based on the executable's location.

use std::path::{Path, PathBuf};

use super::{ConfigError, ConfigResult};

/// File name of the core config
pub const CORE_CONFIG_FILE: &str = "core.toml";

/// File name of the dvar description table
pub const DESCRIPTIONS_FILE: &str = "dvar_descriptions.toml";

/// Returns the base directory by navigating up from the executable.
///
/// The client is run from:
/// `<base>/bin/<executable>`
///
/// This navigates up 2 levels to reach `<base>/`.
pub fn dvars_base_dir() -> ConfigResult<PathBuf> {
    let exe = std::env::current_exe().map_err(ConfigError::IoError)?;
    base_dir_of(&exe)
}

/// Navigate: executable -> bin -> base
fn base_dir_of(exe: &Path) -> ConfigResult<PathBuf> {
    exe.parent() // bin/
        .and_then(|p| p.parent()) // base/
        .map(PathBuf::from)
        .ok_or(ConfigError::NoConfigDirectory)
}

/// Returns the configs directory.
///
/// Path: `<base>/configs/`
pub fn configs_dir() -> ConfigResult<PathBuf> {
    Ok(dvars_base_dir()?.join("configs"))
}

/// Returns the core config path.
///
/// Path: `<base>/configs/core.toml`
pub fn core_config_path() -> ConfigResult<PathBuf> {
    Ok(configs_dir()?.join(CORE_CONFIG_FILE))
}

/// Returns the dvar description table path.
///
/// Path: `<base>/configs/dvar_descriptions.toml`
pub fn descriptions_path() -> ConfigResult<PathBuf> {
    Ok(configs_dir()?.join(DESCRIPTIONS_FILE))
}
