//! Movement-mode key table.
//!
//! One pure lookup from a decoded key event to a tagged command; the
//! stateful exceptions (prefix digits, the escape chord, payload modes) live
//! in the controller. Bindings are fixed by design: motions sit on the home
//! row without modifiers, CTRL pages, ALT reverses word ends and carries
//! redo.

use neme_events::{KeyCode, KeyEvent, KeyModifiers};

/// Escape chord in Typing mode: `ESCAPE_FIRST` then `ESCAPE_SECOND` leaves
/// for Movement, deleting the optimistically inserted first character.
pub const ESCAPE_FIRST: char = 'k';
pub const ESCAPE_SECOND: char = 'j';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    EnterTyping,
    AppendAfter,
    EnterCommand,
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    JumpUp,
    JumpDown,
    CharLeft,
    CharRight,
    WordRight,
    WordLeft,
    WordEnd,
    PrevWordEnd,
    BigWordRight,
    BigWordEnd,
    BigWordLeft,
    PrevBigWordEnd,
    Undo,
    Redo,
    FirstNonBlank,
    OpenBelow,
    OpenAbove,
    GotoLine,
    GotoLastLine,
    EnterReplace,
    LineEndChar,
    AppendLineEnd,
    InsertLineStart,
    JoinLines,
    DeleteRight,
    DeleteLeft,
    Indent,
    Unindent,
    Paste,
    PasteNewLine,
    FindCharForward,
    FindCharBackward,
    RepeatFind,
    RepeatFindReverse,
    DeleteLines,
    DeleteToEnd,
    ChangeLines,
    ChangeToEnd,
    Yank,
    YankLine,
    CopyOrYankLine,
    ToggleStreamSelection,
    ToggleLineSelection,
    RectangleOrPaste,
    SearchWordForward,
    SearchWordBackward,
    RepeatSearch,
    RepeatSearchReverse,
}

/// Movement-mode lookup. Digits never reach this table (the controller
/// handles prefix accumulation first); anything unmapped is a silent no-op.
pub fn movement_command(key: &KeyEvent) -> Option<Command> {
    use Command::*;
    let mods = key.chord_mods();
    if mods.is_empty() {
        return match key.code {
            KeyCode::Backspace => Some(JumpUp),
            KeyCode::Enter => Some(JumpDown),
            KeyCode::Char(c) => match c {
                't' => Some(EnterTyping),
                'a' => Some(AppendAfter),
                ' ' => Some(EnterCommand),
                'k' => Some(LineUp),
                'j' => Some(LineDown),
                'h' => Some(CharLeft),
                'l' => Some(CharRight),
                'w' => Some(WordRight),
                'b' => Some(WordLeft),
                'e' => Some(WordEnd),
                'W' => Some(BigWordRight),
                'E' => Some(BigWordEnd),
                'B' => Some(BigWordLeft),
                'u' => Some(Undo),
                's' => Some(FirstNonBlank),
                'o' => Some(OpenBelow),
                'O' => Some(OpenAbove),
                'g' => Some(GotoLine),
                'G' => Some(GotoLastLine),
                'r' => Some(EnterReplace),
                '$' => Some(LineEndChar),
                'A' => Some(AppendLineEnd),
                'I' => Some(InsertLineStart),
                'J' => Some(JoinLines),
                'x' => Some(DeleteRight),
                'X' => Some(DeleteLeft),
                '>' => Some(Indent),
                '<' => Some(Unindent),
                'p' => Some(Paste),
                'P' => Some(PasteNewLine),
                'f' => Some(FindCharForward),
                'F' => Some(FindCharBackward),
                ';' => Some(RepeatFind),
                ',' => Some(RepeatFindReverse),
                'd' => Some(DeleteLines),
                'D' => Some(DeleteToEnd),
                'c' => Some(ChangeLines),
                'C' => Some(ChangeToEnd),
                'y' => Some(Yank),
                'Y' => Some(YankLine),
                'v' => Some(ToggleStreamSelection),
                'V' => Some(ToggleLineSelection),
                '*' => Some(SearchWordForward),
                '#' => Some(SearchWordBackward),
                'n' => Some(RepeatSearch),
                'N' => Some(RepeatSearchReverse),
                _ => None,
            },
            _ => None,
        };
    }
    if mods == KeyModifiers::CTRL {
        return match key.code {
            KeyCode::Char('k') => Some(PageUp),
            KeyCode::Char('j') => Some(PageDown),
            KeyCode::Char('c') => Some(CopyOrYankLine),
            KeyCode::Char('v') => Some(RectangleOrPaste),
            _ => None,
        };
    }
    if mods == KeyModifiers::ALT {
        return match key.code {
            KeyCode::Char('e') => Some(PrevWordEnd),
            KeyCode::Char('b') => Some(PrevBigWordEnd),
            KeyCode::Char('u') => Some(Redo),
            _ => None,
        };
    }
    None
}
