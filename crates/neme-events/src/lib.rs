//! Decoded key events consumed by the interpreter.
//!
//! The surrounding application (event pump, widget embedding) is responsible
//! for turning platform input into this normalized form; the interpreter only
//! ever sees a `KeyEvent`. A bare modifier press is not an event here, so a
//! `KeyEvent` always names a real key.

use std::fmt;

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

/// Normalized logical key representations consumed by higher layers.
/// Printable keys carry their already-shifted character (`Char('A')`, not
/// `Char('a')` plus SHIFT bookkeeping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Plain printable key (no modifiers).
    pub fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::empty())
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CTRL)
    }

    pub fn alt(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// The printable text of the event, if any. CTRL/ALT chords and named
    /// keys produce no text; SHIFT alone does not suppress it.
    pub fn text(&self) -> Option<char> {
        if self.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) {
            return None;
        }
        match self.code {
            KeyCode::Char(c) => Some(c),
            _ => None,
        }
    }

    /// Modifier set with SHIFT masked out; the shifted character already
    /// encodes it, so dispatch tables compare against this.
    pub fn chord_mods(&self) -> KeyModifiers {
        self.mods & !KeyModifiers::SHIFT
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.code, self.mods)
    }
}
