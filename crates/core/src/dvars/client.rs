//! The client's own dvars
//!
//! Variables the client adds on top of the game's set: console colours,
//! movement tunables and a few renderer/debug switches.

use dvars_engine::DvarHandle;

use super::flags::DvarFlags;
use super::register::DvarRegistrar;

/// Console colour dvars: name, default RGBA, description
const CONSOLE_COLORS: [(&str, [f32; 4], &str); 9] = [
    ("con_inputBoxColor", [0.2, 0.2, 0.2, 0.9], "Color of the console input box"),
    ("con_inputHintBoxColor", [0.3, 0.3, 0.3, 1.0], "Color of the console input hint box"),
    ("con_outputBarColor", [0.5, 0.5, 0.5, 0.6], "Color of the console output slider bar"),
    ("con_outputSliderColor", [0.0, 0.7, 1.0, 1.0], "Color of the console output slider"),
    ("con_outputWindowColor", [0.25, 0.25, 0.25, 0.85], "Color of the console output window"),
    (
        "con_inputDvarMatchColor",
        [1.0, 1.0, 0.8, 1.0],
        "Color of matched dvar names in the console hint box",
    ),
    (
        "con_inputDvarValueColor",
        [1.0, 1.0, 0.8, 1.0],
        "Color of dvar values in the console hint box",
    ),
    (
        "con_inputDvarInactiveValueColor",
        [0.8, 0.8, 0.8, 1.0],
        "Color of inactive dvar values in the console hint box",
    ),
    (
        "con_inputCmdMatchColor",
        [0.8, 0.8, 1.0, 1.0],
        "Color of matched commands in the console hint box",
    ),
];

/// Handles for the client's dvars
#[derive(Debug, Clone)]
pub struct ClientDvars {
    /// Console colours, in [`CONSOLE_COLORS`] order
    pub console_colors: Vec<DvarHandle>,
    pub jump_enable_fall_damage: DvarHandle,
    pub jump_ladder_push_vel: DvarHandle,
    pub jump_spread_add: DvarHandle,
    pub pm_bouncing: DvarHandle,
    pub r_fullbright: DvarHandle,
    pub cg_legacy_crash_handling: DvarHandle,
    pub g_enable_elevators: DvarHandle,
}

impl ClientDvars {
    /// Every registered handle, console colours first
    pub fn handles(&self) -> Vec<DvarHandle> {
        let mut handles = self.console_colors.clone();
        handles.extend([
            self.jump_enable_fall_damage,
            self.jump_ladder_push_vel,
            self.jump_spread_add,
            self.pm_bouncing,
            self.r_fullbright,
            self.cg_legacy_crash_handling,
            self.g_enable_elevators,
        ]);
        handles
    }
}

/// Register the client's dvars
pub fn register_client_dvars(registrar: &DvarRegistrar<'_>) -> ClientDvars {
    let console_colors = CONSOLE_COLORS
        .iter()
        .map(|(name, color, description)| {
            registrar.register_vec4(name, *color, 0.0, 1.0, DvarFlags::SAVED, description)
        })
        .collect();

    let dvars = ClientDvars {
        console_colors,
        jump_enable_fall_damage: registrar.register_bool(
            "jump_enableFallDamage",
            true,
            DvarFlags::REPLICATED,
            "Enable fall damage",
        ),
        jump_ladder_push_vel: registrar.register_float(
            "jump_ladderPushVel",
            128.0,
            0.0,
            1024.0,
            DvarFlags::REPLICATED,
            "The velocity of a jump off of a ladder",
        ),
        jump_spread_add: registrar.register_float(
            "jump_spreadAdd",
            64.0,
            0.0,
            512.0,
            DvarFlags::REPLICATED,
            "The amount of spread scale to add as a side effect of jumping",
        ),
        pm_bouncing: registrar.register_bool(
            "pm_bouncing",
            false,
            DvarFlags::REPLICATED,
            "Enable bouncing",
        ),
        r_fullbright: registrar.register_bool(
            "r_fullbright",
            false,
            DvarFlags::CHEAT,
            "Toggles rendering without lighting",
        ),
        cg_legacy_crash_handling: registrar.register_bool(
            "cg_legacyCrashHandling",
            false,
            DvarFlags::SAVED,
            "Disable new crash handling",
        ),
        g_enable_elevators: registrar.register_bool(
            "g_enableElevators",
            false,
            DvarFlags::REPLICATED,
            "Enable elevators",
        ),
    };

    tracing::debug!("Registered {} client dvars", dvars.handles().len());
    dvars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dvars::{dvar_help, DvarRegistry};
    use dvars_engine::{DvarStore, MemoryDvarStore};
    use dvars_sdk::DvarValue;

    #[test]
    fn test_register_client_dvars() {
        let registry = DvarRegistry::new();
        let store = MemoryDvarStore::new();
        let dvars = register_client_dvars(&DvarRegistrar::new(&registry, &store));

        assert_eq!(dvars.console_colors.len(), 9);
        assert_eq!(dvars.handles().len(), 16);
        assert_eq!(store.len(), dvars.handles().len());
        assert_eq!(registry.len(), 16);
        assert_eq!(store.value(dvars.r_fullbright), Some(DvarValue::Bool(false)));
        assert_eq!(store.find(0xD21FD99F), Some(dvars.r_fullbright));
    }

    #[test]
    fn test_client_dvar_help() {
        let registry = DvarRegistry::new();
        let store = MemoryDvarStore::new();
        register_client_dvars(&DvarRegistrar::new(&registry, &store));

        assert_eq!(
            dvar_help("con_inputBoxColor", &registry, &store),
            "con_inputBoxColor - Color of the console input box\n\
             Domain is any 4D vector with components from 0 to 1"
        );
        assert_eq!(registry.complete("con_").len(), 9);
    }
}
