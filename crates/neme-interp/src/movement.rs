//! Movement-mode command execution.
//!
//! The keymap resolves a key to a [`Command`]; this module carries it out
//! against the view, consuming the numeric prefix for repeat counts. Counts
//! for line-bounded motions are clamped to the buffer's line count; character
//! motions use the raw count.

use neme_text::{scan, search};
use neme_view::{Direction, TextView};
use tracing::trace;

use crate::controller::ModeController;
use crate::keymap::Command;
use crate::scope::{ReadWrite, ReadWriteUndo};
use crate::selection;
use crate::state::{Mode, SelectionMode};

pub(crate) fn apply<V: TextView>(ctl: &mut ModeController, view: &mut V, cmd: Command) {
    use Command::*;
    let count = ctl.state.prefix.count() as usize;
    let clamped = ctl.state.prefix.count_clamped(view.line_count()) as usize;
    trace!(target: "interp.dispatch", ?cmd, count, "movement_command");
    match cmd {
        EnterTyping => ctl.set_mode(view, Mode::Typing),
        AppendAfter => {
            view.char_right();
            ctl.set_mode(view, Mode::Typing);
        }
        EnterCommand => ctl.set_mode(view, Mode::Command),
        LineUp => {
            for _ in 0..clamped {
                view.line_up();
            }
        }
        LineDown => {
            for _ in 0..clamped {
                view.line_down();
            }
        }
        PageUp => {
            for _ in 0..clamped {
                view.page_up();
            }
        }
        PageDown => {
            for _ in 0..clamped {
                view.page_down();
            }
        }
        JumpUp => {
            for _ in 0..ctl.opts.jump_lines as usize * clamped {
                view.line_up();
            }
        }
        JumpDown => {
            for _ in 0..ctl.opts.jump_lines as usize * clamped {
                view.line_down();
            }
        }
        CharLeft => {
            for _ in 0..count {
                view.char_left();
            }
        }
        CharRight => {
            for _ in 0..count {
                view.char_right();
            }
        }
        WordRight => {
            for _ in 0..count {
                view.word_right();
            }
        }
        WordLeft => {
            for _ in 0..count {
                view.word_left();
            }
        }
        WordEnd => {
            // Land on the last character of the current/next word; the
            // shuffle around the end primitive is what produces that net
            // effect.
            for _ in 0..count {
                view.char_right();
                view.word_right_end();
                view.char_left();
            }
        }
        PrevWordEnd => {
            for _ in 0..count {
                view.word_left_end();
                view.char_left();
            }
        }
        BigWordRight => {
            for _ in 0..count {
                if let Some(pos) = scan::next_big_word(view, Direction::Right) {
                    view.goto_pos(pos);
                }
            }
        }
        BigWordEnd => {
            for _ in 0..count {
                if let Some(pos) = scan::next_big_word(view, Direction::Right) {
                    view.goto_pos(pos);
                    let end = scan::word_end(view, true);
                    view.goto_pos(end);
                }
            }
        }
        BigWordLeft => {
            for _ in 0..count {
                if let Some(pos) = scan::next_big_word(view, Direction::Left) {
                    view.goto_pos(pos);
                    let start = scan::word_start(view, true);
                    view.goto_pos(start);
                }
            }
        }
        PrevBigWordEnd => {
            for _ in 0..count {
                if let Some(pos) = scan::next_big_word(view, Direction::Left) {
                    view.goto_pos(pos);
                }
            }
        }
        Undo => {
            let mut g = ReadWrite::new(view);
            for _ in 0..count {
                g.undo();
            }
        }
        Redo => {
            let mut g = ReadWrite::new(view);
            for _ in 0..count {
                g.redo();
            }
        }
        FirstNonBlank => view.vc_home(),
        OpenBelow => {
            {
                let mut g = ReadWriteUndo::new(view);
                for _ in 0..count {
                    insert_line(&mut *g, Direction::Below);
                }
            }
            ctl.set_mode(view, Mode::Typing);
        }
        OpenAbove => {
            {
                let mut g = ReadWriteUndo::new(view);
                for _ in 0..count {
                    insert_line(&mut *g, Direction::Above);
                }
            }
            ctl.set_mode(view, Mode::Typing);
        }
        GotoLine => {
            // Only meaningful with a prefix; a bare `g` stays reserved for a
            // future command-line entry point.
            if !ctl.state.prefix.is_empty() {
                view.goto_line(clamped - 1);
            }
        }
        GotoLastLine => view.goto_line(view.line_count()),
        EnterReplace => {
            ctl.state.replace_repeat = count as u32;
            ctl.set_mode(view, Mode::ReplaceChar);
        }
        LineEndChar => {
            view.line_end();
            view.char_left();
        }
        AppendLineEnd => {
            view.line_end();
            ctl.set_mode(view, Mode::Typing);
        }
        InsertLineStart => {
            view.vc_home();
            ctl.set_mode(view, Mode::Typing);
        }
        JoinLines => {
            let mut g = ReadWriteUndo::new(view);
            for _ in 0..clamped {
                join_with_next_line(&mut *g);
            }
        }
        DeleteRight => {
            let (line, index) = view.cursor();
            let mut g = ReadWriteUndo::new(view);
            g.set_selection(line, index, line, index + count);
            g.cut();
        }
        DeleteLeft => {
            let mut g = ReadWriteUndo::new(view);
            for _ in 0..count {
                g.delete_back();
            }
        }
        Indent => {
            let (line, _) = view.cursor();
            let mut g = ReadWriteUndo::new(view);
            for offset in 0..count {
                g.indent(line + offset);
            }
        }
        Unindent => {
            let (line, _) = view.cursor();
            let mut g = ReadWriteUndo::new(view);
            for offset in 0..count {
                g.unindent(line + offset);
            }
        }
        Paste => {
            let mut g = ReadWriteUndo::new(view);
            for _ in 0..count {
                g.paste();
            }
        }
        PasteNewLine => {
            let mut g = ReadWriteUndo::new(view);
            for _ in 0..count {
                insert_line(&mut *g, Direction::Below);
                g.paste();
            }
        }
        FindCharForward => {
            ctl.state.find_direction = Direction::Right;
            ctl.set_mode(view, Mode::FindChar);
        }
        FindCharBackward => {
            ctl.state.find_direction = Direction::Left;
            ctl.set_mode(view, Mode::FindChar);
        }
        RepeatFind => {
            if let Some(ch) = ctl.state.find_char {
                scan::jump_to_char_in_line(view, ch, ctl.state.find_direction);
            }
        }
        RepeatFindReverse => {
            if let Some(ch) = ctl.state.find_char {
                scan::jump_to_char_in_line(view, ch, ctl.state.find_direction.reversed());
            }
        }
        DeleteLines => {
            // Like `g`, only acts with a prefix; bare `d` is reserved.
            if !ctl.state.prefix.is_empty() {
                let mut g = ReadWrite::new(view);
                selection::delete_lines(&mut *g, clamped, Direction::Below);
            }
        }
        DeleteToEnd => {
            let mut g = ReadWrite::new(view);
            selection::delete_to_eol(&mut *g);
        }
        ChangeLines => {
            if !ctl.state.prefix.is_empty() {
                {
                    let mut g = ReadWrite::new(view);
                    selection::delete_lines(&mut *g, clamped, Direction::Below);
                }
                ctl.set_mode(view, Mode::Typing);
            }
        }
        ChangeToEnd => {
            {
                let mut g = ReadWrite::new(view);
                selection::delete_to_eol(&mut *g);
            }
            ctl.set_mode(view, Mode::Typing);
        }
        Yank => {
            if ctl.state.selection_mode != SelectionMode::Disabled {
                view.copy();
                selection::disable_selection(&mut ctl.state, view);
            } else if !ctl.state.prefix.is_empty() {
                selection::yank_lines(view, clamped, Direction::Below);
            }
            // Bare `y` without selection or prefix stays reserved for a
            // future command-line entry point.
        }
        YankLine => {
            if ctl.state.selection_mode != SelectionMode::Disabled {
                view.copy();
                selection::disable_selection(&mut ctl.state, view);
            } else {
                selection::yank_lines(view, clamped, Direction::Below);
            }
        }
        CopyOrYankLine => {
            if ctl.state.selection_mode != SelectionMode::Disabled {
                view.copy();
                selection::disable_selection(&mut ctl.state, view);
            } else {
                selection::yank_to_eol(view, true);
            }
        }
        ToggleStreamSelection => {
            selection::toggle_selection(&mut ctl.state, view, SelectionMode::Character);
        }
        ToggleLineSelection => {
            selection::toggle_selection(&mut ctl.state, view, SelectionMode::Line);
        }
        RectangleOrPaste => {
            if ctl.state.selection_mode != SelectionMode::Disabled {
                selection::change_selection_mode(&mut ctl.state, view, SelectionMode::Rectangular);
            } else {
                let mut g = ReadWriteUndo::new(view);
                for _ in 0..count {
                    g.paste();
                }
            }
        }
        SearchWordForward => {
            if let Some(last) = search::find_word_under_cursor(view, Direction::Below) {
                ctl.state.last_search = Some(last);
            }
            ctl.state.last_search_direction = Direction::Below;
        }
        SearchWordBackward => {
            if let Some(last) = search::find_word_under_cursor(view, Direction::Above) {
                ctl.state.last_search = Some(last);
            }
            ctl.state.last_search_direction = Direction::Above;
        }
        RepeatSearch => {
            if let Some(last) = ctl.state.last_search.clone() {
                search::repeat_last_search(view, &last, ctl.state.last_search_direction);
            }
        }
        RepeatSearchReverse => {
            if let Some(last) = ctl.state.last_search.clone() {
                search::repeat_last_search(view, &last, ctl.state.last_search_direction.reversed());
            }
        }
    }
}

/// Open an empty line below or above the caret line and move onto it.
pub(crate) fn insert_line<V: TextView + ?Sized>(view: &mut V, direction: Direction) {
    let (line, _) = view.cursor();
    if direction == Direction::Below {
        if line + 1 < view.line_count() {
            view.insert_at("\n", line + 1, 0);
        } else {
            let end = view.line_length(line);
            view.insert_at("\n", line, end);
        }
        view.set_cursor(line + 1, 0);
    } else {
        view.insert_at("\n", line, 0);
        view.set_cursor(line, 0);
    }
}

/// Join the caret line with the one below, a single space at the seam and
/// the next line's leading blanks dropped. Caret stays where it was.
fn join_with_next_line<V: TextView + ?Sized>(view: &mut V) {
    let (line, index) = view.cursor();
    if line + 1 >= view.line_count() {
        return;
    }
    let next = view.line_text(line + 1).unwrap_or_default();
    let seam = format!(" {}", next.trim_start());
    let end = view.line_length(line).saturating_sub(1);
    view.insert_at(&seam, line, end);
    view.set_cursor(line + 1, 0);
    view.delete_line();
    view.set_cursor(line, index);
}
