//! Interpreter-owned editing state.

use neme_text::LastSearch;
use neme_view::{Direction, SelectionShape};

use crate::prefix::NumericPrefix;

/// The active editing mode. Exactly one is active; transitions happen only
/// through the controller so their view side effects stay consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Movement,
    Typing,
    Command,
    ReplaceChar,
    FindChar,
}

/// Interpreter-side selection mode, mirrored into the view's native
/// selection shape while active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Disabled,
    Character,
    Line,
    Rectangular,
}

impl SelectionMode {
    pub(crate) fn shape(self) -> Option<SelectionShape> {
        match self {
            Self::Disabled => None,
            Self::Character => Some(SelectionShape::Stream),
            Self::Line => Some(SelectionShape::Lines),
            Self::Rectangular => Some(SelectionShape::Rectangle),
        }
    }
}

/// Everything the interpreter remembers across key events. Lives as long as
/// the editing session; the view never touches it.
#[derive(Debug)]
pub struct InterpreterState {
    pub mode: Mode,
    pub prefix: NumericPrefix,
    /// Repeat count captured on entering ReplaceChar mode, consumed by the
    /// payload character.
    pub replace_repeat: u32,
    /// Char-find target remembered across `;`/`,` repeats.
    pub find_char: Option<char>,
    pub find_direction: Direction,
    pub selection_mode: SelectionMode,
    pub last_search: Option<LastSearch>,
    pub last_search_direction: Direction,
    /// True right after the first key of the two-key escape chord in Typing
    /// mode; reset unless the very next event completes the chord.
    pub escape_first_pending: bool,
}

impl Default for InterpreterState {
    fn default() -> Self {
        Self {
            mode: Mode::Movement,
            prefix: NumericPrefix::new(),
            replace_repeat: 1,
            find_char: None,
            find_direction: Direction::Right,
            selection_mode: SelectionMode::Disabled,
            last_search: None,
            last_search_direction: Direction::Below,
            escape_first_pending: false,
        }
    }
}

impl InterpreterState {
    pub fn new() -> Self {
        Self::default()
    }
}
