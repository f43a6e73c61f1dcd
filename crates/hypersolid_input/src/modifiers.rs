//! Modifier key state

use bitflags::bitflags;
use winit::keyboard::ModifiersState;

bitflags! {
    /// Modifier keys held during a pointer drag
    ///
    /// Selects which pair of planes the drag rotates (see [`crate::DragMode`]).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key
        const SHIFT = 1 << 0;
        /// Alt / Option key
        const ALT = 1 << 1;
        /// Control key
        const CTRL = 1 << 2;
    }
}

impl Modifiers {
    /// Look up a single modifier by name (`shift`, `alt`, `ctrl`/`control`)
    pub fn parse_key(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "shift" => Some(Modifiers::SHIFT),
            "alt" | "option" => Some(Modifiers::ALT),
            "ctrl" | "control" => Some(Modifiers::CTRL),
            _ => None,
        }
    }
}

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        let mut mods = Modifiers::empty();
        mods.set(Modifiers::SHIFT, state.shift_key());
        mods.set(Modifiers::ALT, state.alt_key());
        mods.set(Modifiers::CTRL, state.control_key());
        mods
    }
}
