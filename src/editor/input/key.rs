//! Logical key events.

/// Byte sent by the Backspace key in raw mode
pub const BACKSPACE: u8 = 127;

/// Byte sent by the Enter key in raw mode (ICRNL is off)
pub const ENTER: u8 = b'\r';

/// First byte of every escape sequence
pub const ESCAPE: u8 = 0x1b;

/// Byte produced by Ctrl plus `letter`
pub const fn ctrl_key(letter: u8) -> u8 {
    letter & 0x1f
}

/// One decoded keypress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Any byte that did not start an escape sequence, control codes included
    Byte(u8),
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    /// A lone escape or an unrecognised escape sequence
    Escape,
}

impl Key {
    /// True for the Ctrl chord of `letter`
    pub fn is_ctrl(self, letter: u8) -> bool {
        self == Key::Byte(ctrl_key(letter))
    }

    /// Keys that erase: Backspace, Ctrl-H and Delete
    pub fn is_erase(self) -> bool {
        matches!(self, Key::Byte(BACKSPACE) | Key::Delete) || self.is_ctrl(b'h')
    }
}
