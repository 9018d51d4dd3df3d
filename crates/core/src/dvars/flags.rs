//! Dvar flags

use bitflags::bitflags;

bitflags! {
    /// Flags passed through to the store when a dvar is registered
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DvarFlags: u32 {
        /// Value is written to the player config
        const SAVED = 0x1;
        /// Changes take effect on the next map load
        const LATCHED = 0x2;
        /// Only changeable with cheats enabled
        const CHEAT = 0x4;
        /// Server value is sent to clients
        const REPLICATED = 0x8;
        /// Cannot be changed from the console
        const READ_ONLY = 0x2000;
    }
}
